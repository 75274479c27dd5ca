use crate::UnGraph;
use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// Classification of an edge with respect to a DFS tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeKind {
    Tree,
    /// A non-tree edge towards a strict ancestor.
    Frond,
}

/// Result of a depth-first traversal of the whole graph.
#[derive(Debug, Clone)]
pub struct DfsTree {
    /// Nodes in visitation order.
    pub ordering: Vec<NodeIndex>,
    /// 1-based preorder rank per node.
    pub rank: Vec<usize>,
    /// Parent of each node in the DFS forest. A root is its own parent.
    pub parent: Vec<NodeIndex>,
    /// Tree children of each node, in visitation order.
    pub children: Vec<Vec<NodeIndex>>,
}

impl DfsTree {
    fn new(graph_size: usize) -> Self {
        Self {
            ordering: Vec::with_capacity(graph_size),
            rank: vec![usize::MAX; graph_size],
            parent: vec![NodeIndex::end(); graph_size],
            children: vec![Vec::new(); graph_size],
        }
    }

    /// True if `u` starts its own DFS tree.
    pub fn is_root(&self, u: NodeIndex) -> bool {
        self.parent[u.index()] == u
    }
}

struct Frame {
    u: NodeIndex,
    neighbors: Vec<NodeIndex>,
    cursor: usize,
}

/// Depth-first traversal with an explicit frame worklist. Graphs of a few
/// thousand nodes overflow the native call stack, so no recursion here.
///
/// Visits neighbors in the order given by `adjacency_order` (indexed by
/// node, falls back to petgraph's adjacency order when `None`), producing
/// the same visitation order a naive recursive DFS would. Starts from
/// `root` if given, otherwise from an arbitrary node, and restarts from an
/// arbitrary unvisited node until the whole graph is covered. Callers that
/// need per-component data should pre-partition with
/// [`crate::components::connected_components_as_subgraphs`] instead of
/// relying on the restart.
pub fn dfs_with_parent_data(
    graph: &UnGraph,
    root: Option<NodeIndex>,
    adjacency_order: Option<&[Vec<NodeIndex>]>,
) -> DfsTree {
    let graph_size = graph.node_count();
    let mut tree = DfsTree::new(graph_size);
    let mut visited = FixedBitSet::with_capacity(graph_size);
    let mut time = 0;

    let neighbor_list = |u: NodeIndex| -> Vec<NodeIndex> {
        match adjacency_order {
            Some(order) => order[u.index()].clone(),
            None => graph.neighbors(u).collect(),
        }
    };

    let starts = root.into_iter().chain(graph.node_indices());
    for start in starts {
        if visited.contains(start.index()) {
            continue;
        }
        visited.insert(start.index());
        time += 1;
        tree.rank[start.index()] = time;
        tree.ordering.push(start);
        tree.parent[start.index()] = start;

        let mut stack = vec![Frame {
            u: start,
            neighbors: neighbor_list(start),
            cursor: 0,
        }];

        while let Some(top) = stack.len().checked_sub(1) {
            let u = stack[top].u;
            if stack[top].cursor == stack[top].neighbors.len() {
                stack.pop();
                continue;
            }

            let v = stack[top].neighbors[stack[top].cursor];
            stack[top].cursor += 1;
            if visited.contains(v.index()) {
                continue;
            }

            visited.insert(v.index());
            time += 1;
            tree.rank[v.index()] = time;
            tree.ordering.push(v);
            tree.parent[v.index()] = u;
            tree.children[u.index()].push(v);
            stack.push(Frame {
                u: v,
                neighbors: neighbor_list(v),
                cursor: 0,
            });
        }
    }

    tree
}

/// Labels every edge as tree or frond with respect to `tree`. Each
/// non-root node has exactly one tree edge, so a parallel duplicate of a
/// tree edge classifies as a frond.
pub fn classify_edges(graph: &UnGraph, tree: &DfsTree) -> Vec<EdgeKind> {
    let mut kinds = vec![EdgeKind::Frond; graph.edge_count()];
    let mut has_tree_edge = FixedBitSet::with_capacity(graph.node_count());

    for e in graph.edge_references() {
        let (a, b) = (e.source(), e.target());
        let child = if a != b && tree.parent[b.index()] == a {
            b
        } else if a != b && tree.parent[a.index()] == b {
            a
        } else {
            continue;
        };
        if !has_tree_edge.contains(child.index()) {
            has_tree_edge.insert(child.index());
            kinds[e.id().index()] = EdgeKind::Tree;
        }
    }

    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::named_graphs::{cycle_graph, disjoint_union, graph_from_edges, path_graph};

    fn assert_consistent(g: &UnGraph, tree: &DfsTree) {
        assert_eq!(tree.ordering.len(), g.node_count());
        for (i, &u) in tree.ordering.iter().enumerate() {
            assert_eq!(tree.rank[u.index()], i + 1);
        }
        for u in g.node_indices() {
            let p = tree.parent[u.index()];
            if p != u {
                assert!(tree.rank[p.index()] < tree.rank[u.index()]);
                assert!(tree.children[p.index()].contains(&u));
            }
        }
    }

    #[test]
    fn test_path_ordering() {
        let g = path_graph(4);
        let tree = dfs_with_parent_data(&g, Some(NodeIndex::new(0)), None);
        assert_consistent(&g, &tree);
        assert_eq!(
            tree.ordering,
            vec![
                NodeIndex::new(0),
                NodeIndex::new(1),
                NodeIndex::new(2),
                NodeIndex::new(3)
            ]
        );
        assert!(tree.is_root(NodeIndex::new(0)));
    }

    #[test]
    fn test_custom_adjacency_order() {
        // star from 0, forced visiting order 3, 1, 2
        let g = graph_from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        let order = vec![
            vec![NodeIndex::new(3), NodeIndex::new(1), NodeIndex::new(2)],
            vec![NodeIndex::new(0)],
            vec![NodeIndex::new(0)],
            vec![NodeIndex::new(0)],
        ];
        let tree = dfs_with_parent_data(&g, Some(NodeIndex::new(0)), Some(&order));
        assert_consistent(&g, &tree);
        assert_eq!(
            tree.ordering,
            vec![
                NodeIndex::new(0),
                NodeIndex::new(3),
                NodeIndex::new(1),
                NodeIndex::new(2)
            ]
        );
        assert_eq!(
            tree.children[0],
            vec![NodeIndex::new(3), NodeIndex::new(1), NodeIndex::new(2)]
        );
    }

    #[test]
    fn test_restart_on_disconnected() {
        let g = disjoint_union(&cycle_graph(3), &cycle_graph(3));
        let tree = dfs_with_parent_data(&g, None, None);
        assert_consistent(&g, &tree);
        let roots = g.node_indices().filter(|&u| tree.is_root(u)).count();
        assert_eq!(roots, 2);
    }

    #[test]
    fn test_classify_triangle() {
        let g = cycle_graph(3);
        let tree = dfs_with_parent_data(&g, Some(NodeIndex::new(0)), None);
        let kinds = classify_edges(&g, &tree);
        let fronds = kinds.iter().filter(|&&k| k == EdgeKind::Frond).count();
        let trees = kinds.iter().filter(|&&k| k == EdgeKind::Tree).count();
        assert_eq!(trees, 2);
        assert_eq!(fronds, 1);
    }

    #[test]
    fn test_classify_path_all_tree() {
        let g = path_graph(5);
        let tree = dfs_with_parent_data(&g, None, None);
        let kinds = classify_edges(&g, &tree);
        assert!(kinds.iter().all(|&k| k == EdgeKind::Tree));
    }

    #[test]
    fn test_empty_graph() {
        let g = UnGraph::new_undirected();
        let tree = dfs_with_parent_data(&g, None, None);
        assert!(tree.ordering.is_empty());
    }
}
