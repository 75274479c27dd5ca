use crate::UnGraph;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

struct Frame {
    u: usize,
    parent_edge: Option<EdgeIndex>,
    /// Incident (edge, other endpoint) pairs, snapshotted on entry.
    incident: Vec<(EdgeIndex, usize)>,
    cursor: usize,
    tree_children: usize,
    /// Tree edge whose child subtree is being explored.
    awaiting: Option<(EdgeIndex, usize)>,
}

/// Lowpoint DFS over one or more components with an explicit frame
/// worklist. Fills `components` (edge sets, popped off `edge_stack` when a
/// tree edge closes a block) and `is_cut`.
fn dfs(
    graph: &UnGraph,
    start: usize,
    time: &mut usize,
    depth: &mut [usize],
    low: &mut [usize],
    is_cut: &mut [bool],
    components: &mut Vec<Vec<EdgeIndex>>,
) {
    let incident = |u: usize| -> Vec<(EdgeIndex, usize)> {
        graph
            .edges(NodeIndex::new(u))
            .map(|e| (e.id(), e.target().index() ^ e.source().index() ^ u))
            .collect()
    };

    depth[start] = *time;
    low[start] = *time;
    *time += 1;

    let mut edge_stack: Vec<EdgeIndex> = Vec::new();
    let mut stack = vec![Frame {
        u: start,
        parent_edge: None,
        incident: incident(start),
        cursor: 0,
        tree_children: 0,
        awaiting: None,
    }];

    while let Some(top) = stack.len().checked_sub(1) {
        let u = stack[top].u;

        if let Some((eid, c)) = stack[top].awaiting.take() {
            // returned from the subtree under tree edge (u, c)
            low[u] = low[u].min(low[c]);
            stack[top].tree_children += 1;
            if low[c] >= depth[u] {
                if stack[top].parent_edge.is_some() {
                    is_cut[u] = true;
                }
                let mut component = Vec::new();
                while let Some(e) = edge_stack.pop() {
                    component.push(e);
                    if e == eid {
                        break;
                    }
                }
                // 2-edge pops cannot happen in a simple graph
                debug_assert_ne!(component.len(), 2, "edge stack out of sync");
                components.push(component);
            }
        }

        let mut descended = false;
        while stack[top].cursor < stack[top].incident.len() {
            let (eid, v) = stack[top].incident[stack[top].cursor];
            stack[top].cursor += 1;

            if Some(eid) == stack[top].parent_edge || v == u {
                continue;
            }
            if depth[v] == usize::MAX {
                edge_stack.push(eid);
                depth[v] = *time;
                low[v] = *time;
                *time += 1;
                stack[top].awaiting = Some((eid, v));
                stack.push(Frame {
                    u: v,
                    parent_edge: Some(eid),
                    incident: incident(v),
                    cursor: 0,
                    tree_children: 0,
                    awaiting: None,
                });
                descended = true;
                break;
            }
            if depth[v] < depth[u] {
                // frond to an ancestor; the mirror case was stacked when
                // the descendant end discovered it
                edge_stack.push(eid);
                low[u] = low[u].min(depth[v]);
            }
        }
        if descended {
            continue;
        }

        if stack[top].parent_edge.is_none() {
            is_cut[u] = stack[top].tree_children > 1;
        }
        stack.pop();
    }

    debug_assert!(edge_stack.is_empty(), "edge stack out of sync");
}

fn decompose(graph: &UnGraph) -> (Vec<Vec<EdgeIndex>>, Vec<bool>) {
    let graph_size = graph.node_count();
    let mut time = 0;
    let mut depth = vec![usize::MAX; graph_size];
    let mut low = vec![usize::MAX; graph_size];
    let mut is_cut = vec![false; graph_size];
    let mut components = Vec::new();

    for u in 0..graph_size {
        if depth[u] == usize::MAX {
            dfs(
                graph,
                u,
                &mut time,
                &mut depth,
                &mut low,
                &mut is_cut,
                &mut components,
            );
        }
    }

    (components, is_cut)
}

/// Returns the biconnected components of the graph, each as the list of
/// edge indices it consists of. A single-edge component (a bridge with its
/// two endpoints) is a degenerate but valid block and is reported.
/// Graphs with 0 or 1 nodes have no components.
pub fn find_biconnected_components(graph: &UnGraph) -> Vec<Vec<EdgeIndex>> {
    decompose(graph).0
}

/// Returns the articulation vertices of the graph: a non-root vertex u is
/// one iff some tree child c satisfies `low[c] >= depth[u]`, a DFS root
/// iff it has more than one tree child.
pub fn find_articulation_vertices(graph: &UnGraph) -> Vec<NodeIndex> {
    decompose(graph)
        .1
        .iter()
        .enumerate()
        .filter(|&(_, &cut)| cut)
        .map(|(u, _)| NodeIndex::new(u))
        .collect()
}
