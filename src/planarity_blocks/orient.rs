use std::mem;

use crate::planarity_blocks::structures::ComponentGraph;

struct Frame {
    u: usize,
    cursor: usize,
    /// Tree edge whose subtree is being explored, weighted on resume.
    awaiting: Option<usize>,
}

/// Orientation pass: roots the component at `root`, assigns 1-based
/// preorder ranks, orients every edge away from the root, computes the
/// per-edge lowpoints and from them the edge weights. Explicit frame
/// worklist, components can be deeper than the native call stack.
pub fn orient(g: &mut ComponentGraph, root: usize) {
    let mut time = 1;
    g.rank[root] = 1;

    let mut stack = vec![Frame {
        u: root,
        cursor: 0,
        awaiting: None,
    }];

    while let Some(top) = stack.len().checked_sub(1) {
        let u = stack[top].u;

        if let Some(eid) = stack[top].awaiting.take() {
            weigh_edge(g, u, eid);
        }

        let mut descended = false;
        while stack[top].cursor < g.adj[u].len() {
            let eid = g.adj[u][stack[top].cursor];
            stack[top].cursor += 1;

            if g.low1[eid] != usize::MAX {
                // already oriented from the other endpoint
                continue;
            }

            let to = g.other_endpoint(eid, u);
            if g.edges[eid].0 == to {
                let edge = &mut g.edges[eid];
                mem::swap(&mut edge.0, &mut edge.1);
            }

            g.low1[eid] = g.rank[u];
            g.low2[eid] = g.rank[u];

            if g.rank[to] == usize::MAX {
                g.parent[to] = Some(eid);
                time += 1;
                g.rank[to] = time;
                stack[top].awaiting = Some(eid);
                stack.push(Frame {
                    u: to,
                    cursor: 0,
                    awaiting: None,
                });
                descended = true;
                break;
            }

            // a frond, it reaches exactly its target
            g.low1[eid] = g.rank[to];
            weigh_edge(g, u, eid);
        }

        if !descended {
            stack.pop();
        }
    }
}

/// Turns the finished lowpoints of `eid` into its sort weight and folds
/// them into the lowpoints of the tree edge above `u`. Fronds keep
/// `low2 == rank(u)`, so they always take the even weight `2 * rank(to)`.
fn weigh_edge(g: &mut ComponentGraph, u: usize, eid: usize) {
    g.weight[eid] = 2 * g.low1[eid];
    if g.low2[eid] < g.rank[u] {
        // a chordal branch, it also returns strictly above u and must
        // nest inside whatever shares its low point
        g.weight[eid] += 1;
    }

    if let Some(par_eid) = g.parent[u] {
        if g.low1[eid] < g.low1[par_eid] {
            g.low2[par_eid] = g.low1[par_eid].min(g.low2[eid]);
            g.low1[par_eid] = g.low1[eid];
        } else if g.low1[eid] != g.low1[par_eid] {
            g.low2[par_eid] = g.low2[par_eid].min(g.low1[eid]);
        } else {
            g.low2[par_eid] = g.low2[par_eid].min(g.low2[eid]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_diagonal() -> ComponentGraph {
        let mut g = ComponentGraph::new(4, 5);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(3, 0);
        g.add_edge(1, 3);
        g
    }

    #[test]
    fn test_orientation_follows_the_walk() {
        let mut g = square_with_diagonal();
        orient(&mut g, 0);
        for eid in 0..g.m {
            let (s, t) = g.edges[eid];
            if g.is_tree_edge(eid) {
                // tree edges point away from the root
                assert!(g.rank[s] < g.rank[t]);
            } else {
                // fronds point at the ancestor they return to
                assert!(g.rank[s] > g.rank[t]);
                assert_eq!(g.low1[eid], g.rank[t]);
            }
        }
        assert_eq!(g.rank, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_tree_and_frond_split() {
        let mut g = square_with_diagonal();
        orient(&mut g, 0);
        let tree_edges = (0..g.edges.len()).filter(|&e| g.is_tree_edge(e)).count();
        assert_eq!(tree_edges, g.n - 1);
    }

    #[test]
    fn test_lowpoints_on_the_square() {
        let mut g = square_with_diagonal();
        orient(&mut g, 0);
        // dfs path 0-1-2-3, fronds 3->0 and 3->1
        let e01 = 0;
        assert_eq!(g.low1[e01], 1);
        assert_eq!(g.low2[e01], 1);
        let e12 = 1;
        assert_eq!(g.low1[e12], 1);
        assert_eq!(g.low2[e12], 2);
        let e23 = 2;
        assert_eq!(g.low1[e23], 1);
        assert_eq!(g.low2[e23], 2);
    }

    #[test]
    fn test_frond_weights_are_even() {
        let mut g = square_with_diagonal();
        orient(&mut g, 0);
        for eid in 0..g.edges.len() {
            if !g.is_tree_edge(eid) {
                assert_eq!(g.weight[eid] % 2, 0);
                assert_eq!(g.weight[eid], 2 * g.rank[g.edges[eid].1]);
            }
        }
    }
}
