use hashbrown::HashMap;

/// A run of fronds committed to one side of the partial embedding,
/// bounded by its lowest- and highest-reaching edge ids. Edges inside the
/// run are chained through `EmbeddingState::next_in_run`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrondRun {
    pub bounds: Option<(usize, usize)>,
}

impl FrondRun {
    pub fn new(lo: usize, hi: usize) -> Self {
        FrondRun {
            bounds: Some((lo, hi)),
        }
    }
    pub fn empty() -> Self {
        FrondRun { bounds: None }
    }
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
    pub fn lo(&self) -> usize {
        self.bounds.expect("frond run is empty").0
    }
    pub fn hi(&self) -> usize {
        self.bounds.expect("frond run is empty").1
    }
}

/// A left/right pair of frond runs whose sides are entangled: switching
/// one run to the other side forces the whole group to switch.
#[derive(Debug, Clone, PartialEq)]
pub struct FrondGroup {
    pub left: FrondRun,
    pub right: FrondRun,
}

impl FrondGroup {
    pub fn empty() -> Self {
        FrondGroup {
            left: FrondRun::empty(),
            right: FrondRun::empty(),
        }
    }
    pub fn switch_sides(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
    /// Lowest rank any frond of the group returns to.
    fn lowest(&self, g: &ComponentGraph) -> usize {
        match (self.left.is_empty(), self.right.is_empty()) {
            (true, false) => g.low1[self.right.lo()],
            (false, true) => g.low1[self.left.lo()],
            (false, false) => g.low1[self.left.lo()].min(g.low1[self.right.lo()]),
            (true, true) => panic!("frond group has no runs"),
        }
    }
}

/// Dense arena for one biconnected component. Node ids are 0..n, edges are
/// stored once and referenced by index from both endpoints' adjacency
/// lists. After orientation `edges[eid].0` is the vertex the walk scanned
/// the edge from: tree edges point away from the root, fronds at the
/// ancestor they return to (so `edges[eid].1` of a frond is where it
/// ends).
#[derive(Debug, Clone)]
pub struct ComponentGraph {
    pub n: usize,
    pub m: usize,
    pub adj: Vec<Vec<usize>>,
    pub edges: Vec<(usize, usize)>,

    /// Per-edge lowpoints, as 1-based preorder ranks: the two smallest
    /// ranks reachable through the edge and the subtree below it.
    pub low1: Vec<usize>,
    pub low2: Vec<usize>,
    /// Sort weight imposing the canonical per-node visiting order.
    pub weight: Vec<usize>,

    /// Tree edge leading into each vertex, None for the root.
    pub parent: Vec<Option<usize>>,
    /// 1-based preorder rank of each vertex.
    pub rank: Vec<usize>,

    edge_counts: HashMap<(usize, usize), usize>,
}

impl ComponentGraph {
    pub fn new(n: usize, m: usize) -> Self {
        ComponentGraph {
            n,
            m,
            adj: vec![Vec::new(); n],
            edges: Vec::with_capacity(m),
            low1: vec![usize::MAX; m],
            low2: vec![usize::MAX; m],
            weight: vec![usize::MAX; m],
            parent: vec![None; n],
            rank: vec![usize::MAX; n],
            edge_counts: HashMap::new(),
        }
    }

    pub fn other_endpoint(&self, eid: usize, u: usize) -> usize {
        let (s, t) = self.edges[eid];
        if s == u { t } else { s }
    }

    /// True once the edge has been oriented tree-wise, away from the root.
    pub fn is_tree_edge(&self, eid: usize) -> bool {
        self.parent[self.edges[eid].1] == Some(eid)
    }

    /// Inserts an edge, dropping self-loops and parallel duplicates. A
    /// duplicate changes neither biconnectivity nor planarity of a block.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let count = self.edge_counts.entry((u, v)).or_insert(0);
        if *count == 0 && u != v {
            let eid = self.edges.len();
            self.adj[u].push(eid);
            self.adj[v].push(eid);
            self.edges.push((u, v));
        } else {
            self.m -= 1;
        }
        *count += 1;

        if u != v {
            *self.edge_counts.entry((v, u)).or_insert(0) += 1;
        }
    }
}

/// Frond embedding state for one component, discarded with the verdict.
pub struct EmbeddingState {
    /// Group-stack height at the moment each edge started contributing.
    pub group_bottom: Vec<usize>,
    /// First frond of the chain a tree edge's subtree returns through.
    pub chain_start: Vec<usize>,
    /// Next edge in a frond run, usize::MAX terminates the chain.
    pub next_in_run: Vec<usize>,
    /// Stack of frond groups, innermost on top.
    pub groups: Vec<FrondGroup>,
}

fn conflicts_with(run: &FrondRun, eid: usize, g: &ComponentGraph) -> bool {
    !run.is_empty() && g.low1[run.hi()] > g.low1[eid]
}

impl EmbeddingState {
    pub fn new(m: usize) -> Self {
        EmbeddingState {
            group_bottom: vec![0; m],
            chain_start: vec![0; m],
            next_in_run: vec![usize::MAX; m],
            groups: Vec::new(),
        }
    }

    /// Appends run `q` below run `p`, chaining q's high edge under p's low.
    fn merge_runs(&mut self, p: &mut FrondRun, q: &FrondRun) {
        match (p.bounds.as_mut(), q.bounds) {
            (Some((p_lo, _)), Some((lo, hi))) => {
                self.next_in_run[*p_lo] = hi;
                *p_lo = lo;
            }
            (None, _) => p.bounds = q.bounds,
            _ => {}
        }
    }

    /// Folds the constraints produced under `eid` into one group and
    /// reconciles it with the groups of eid's elder siblings. Returns
    /// false when two runs that must share a side cannot, which is the
    /// single non-planar exit of the whole test.
    pub fn merge(&mut self, g: &ComponentGraph, eid: usize) -> bool {
        let u = g.edges[eid].0;
        let par_eid = g.parent[u].expect("merge below the dfs root");

        let mut p = FrondGroup::empty();

        // everything from eid's subtree must end up on one side, the
        // fundamental cycle through par_eid closes around it
        loop {
            let mut q = self.groups.pop().expect("group stack underflow");
            if !q.left.is_empty() {
                q.switch_sides();
            }
            if !q.left.is_empty() {
                return false;
            }

            let lo = q.right.lo();
            if g.low1[lo] > g.low1[par_eid] {
                self.merge_runs(&mut p.right, &q.right);
            } else {
                // q returns at least as low as the cycle itself, it can
                // sit outside and only extends the parent's chain
                self.next_in_run[lo] = self.chain_start[par_eid];
            }

            if self.groups.len() == self.group_bottom[eid] {
                break;
            }
        }

        // sibling groups still conflicting with eid switch or join p
        loop {
            let conflicting = match self.groups.last() {
                Some(q) => {
                    conflicts_with(&q.left, eid, g) || conflicts_with(&q.right, eid, g)
                }
                None => false,
            };
            if !conflicting {
                break;
            }

            let mut q = self.groups.pop().expect("group stack underflow");
            if conflicts_with(&q.right, eid, g) {
                q.switch_sides();
            }
            if conflicts_with(&q.right, eid, g) {
                return false;
            }

            self.merge_runs(&mut p.right, &q.right);
            self.merge_runs(&mut p.left, &q.left);
        }

        if !p.is_empty() {
            self.groups.push(p);
        }

        true
    }

    fn trim_run(&mut self, p: &mut FrondRun, u: usize, g: &ComponentGraph, other: &FrondRun) {
        if p.is_empty() {
            return;
        }

        while p.hi() != usize::MAX && g.edges[p.hi()].1 == u {
            p.bounds = Some((p.lo(), self.next_in_run[p.hi()]));
        }

        if p.hi() == usize::MAX {
            if !other.is_empty() {
                self.next_in_run[p.lo()] = other.lo();
            }
            *p = FrondRun::empty();
        }
    }

    /// Drops constraints that end at the tail of `par_eid`; they bind
    /// nothing once the walk returns above that vertex.
    pub fn trim(&mut self, g: &ComponentGraph, par_eid: usize) {
        let u = g.edges[par_eid].0;

        while let Some(q) = self.groups.last() {
            if q.lowest(g) != g.rank[u] {
                break;
            }
            self.groups.pop();
        }

        if let Some(mut p) = self.groups.pop() {
            let other = p.right;
            self.trim_run(&mut p.left, u, g, &other);
            let other = p.left;
            self.trim_run(&mut p.right, u, g, &other);

            if !p.is_empty() {
                self.groups.push(p);
            }
        }
    }
}
