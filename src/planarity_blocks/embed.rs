use crate::planarity_blocks::structures::{ComponentGraph, EmbeddingState, FrondGroup, FrondRun};

struct Frame {
    u: usize,
    cursor: usize,
    /// Tree edge whose subtree is being embedded, settled on resume.
    awaiting: Option<usize>,
}

/// Embedding pass over the reordered tree: walks the adjacency lists with
/// an explicit frame worklist, pushes a one-frond group per frond and
/// reconciles each finished branch against its elder siblings. Returns
/// false exactly when some group cannot be switched onto an admitting
/// side, the one way a graph fails the test.
pub fn embed_fronds(g: &ComponentGraph, state: &mut EmbeddingState, root: usize) -> bool {
    let mut stack = vec![Frame {
        u: root,
        cursor: 0,
        awaiting: None,
    }];

    while let Some(top) = stack.len().checked_sub(1) {
        let u = stack[top].u;

        if let Some(eid) = stack[top].awaiting.take() {
            if !settle_edge(g, state, u, eid) {
                return false;
            }
        }

        let mut descended = false;
        while stack[top].cursor < g.adj[u].len() {
            let eid = g.adj[u][stack[top].cursor];
            stack[top].cursor += 1;

            state.group_bottom[eid] = state.groups.len();

            let to = g.other_endpoint(eid, u);
            if g.parent[to] == Some(eid) {
                stack[top].awaiting = Some(eid);
                stack.push(Frame {
                    u: to,
                    cursor: 0,
                    awaiting: None,
                });
                descended = true;
                break;
            }

            // a frond opens as its own single-frond group on the right
            state.chain_start[eid] = eid;
            state.groups.push(FrondGroup {
                left: FrondRun::empty(),
                right: FrondRun::new(eid, eid),
            });

            if !settle_edge(g, state, u, eid) {
                return false;
            }
        }
        if descended {
            continue;
        }

        stack.pop();
        if let Some(par_eid) = g.parent[u] {
            // constraints ending at u's parent bind nothing above it
            state.trim(g, par_eid);
        }
    }

    true
}

/// Relates a finished edge to the tree edge above `u`. The list head
/// extends the parent's frond chain (it is the branch every sibling is
/// reconciled against), everything else merges.
fn settle_edge(g: &ComponentGraph, state: &mut EmbeddingState, u: usize, eid: usize) -> bool {
    if g.low1[eid] >= g.rank[u] {
        // reaches nothing above u, constrains only u's subtree
        return true;
    }

    let par_eid = g.parent[u].expect("frond past the dfs root");
    if eid == g.adj[u][0] {
        state.chain_start[par_eid] = state.chain_start[eid];
        true
    } else {
        state.merge(g, eid)
    }
}
