use crate::UnGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// Builds a graph on nodes 0..n with the given edges.
pub fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> UnGraph {
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32);
    }
    for &(u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), None);
    }
    graph
}

/// Complete graph on n nodes. K5 is the smallest non-planar one.
pub fn complete_graph(n: usize) -> UnGraph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    graph_from_edges(n, &edges)
}

/// Complete bipartite graph on a + b nodes. K3,3 is the other minimal
/// non-planar graph.
pub fn complete_bipartite_graph(a: usize, b: usize) -> UnGraph {
    let mut edges = Vec::new();
    for u in 0..a {
        for v in a..(a + b) {
            edges.push((u, v));
        }
    }
    graph_from_edges(a + b, &edges)
}

/// Cycle on n >= 3 nodes.
pub fn cycle_graph(n: usize) -> UnGraph {
    assert!(n >= 3);
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    graph_from_edges(n, &edges)
}

/// Path on n nodes, edges i -- i+1.
pub fn path_graph(n: usize) -> UnGraph {
    let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    graph_from_edges(n, &edges)
}

/// Star with `leaves` leaves hanging off node 0.
pub fn star_graph(leaves: usize) -> UnGraph {
    let edges: Vec<(usize, usize)> = (1..=leaves).map(|i| (0, i)).collect();
    graph_from_edges(leaves + 1, &edges)
}

/// Wheel: a cycle on n - 1 nodes plus a hub adjacent to all of them.
/// Planar for every n.
pub fn wheel_graph(n: usize) -> UnGraph {
    assert!(n >= 4);
    let rim = n - 1;
    let mut edges: Vec<(usize, usize)> = (0..rim).map(|i| (i, (i + 1) % rim)).collect();
    for i in 0..rim {
        edges.push((rim, i));
    }
    graph_from_edges(n, &edges)
}

/// The Petersen graph: outer 5-cycle, inner pentagram, five spokes.
/// Non-planar (contracting the spokes yields K5).
pub fn petersen_graph() -> UnGraph {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
        edges.push((i, 5 + i));
    }
    graph_from_edges(10, &edges)
}

/// The Groetzsch graph, the Mycielskian of C5: 11 nodes, 20 edges,
/// triangle-free, chromatic number 4. Non-planar.
pub fn groetzsch_graph() -> UnGraph {
    let mut edges = Vec::new();
    for i in 0..5 {
        // the base cycle, each shadow node tied to its original's
        // neighbors, hub tied to every shadow
        edges.push((i, (i + 1) % 5));
        edges.push((5 + i, (i + 1) % 5));
        edges.push((5 + i, (i + 4) % 5));
        edges.push((10, 5 + i));
    }
    graph_from_edges(11, &edges)
}

/// The Franklin graph, LCF notation [5, -5]^6: a 12-cycle with six
/// alternating chords. Non-planar (it embeds in the Klein bottle).
pub fn franklin_graph() -> UnGraph {
    let mut edges: Vec<(usize, usize)> = (0..12).map(|i| (i, (i + 1) % 12)).collect();
    for &(u, v) in &[(0, 5), (1, 8), (2, 7), (3, 10), (4, 9), (6, 11)] {
        edges.push((u, v));
    }
    graph_from_edges(12, &edges)
}

/// The Chvatal graph: 12 nodes, 24 edges, 4-regular, triangle-free.
/// Non-planar.
pub fn chvatal_graph() -> UnGraph {
    graph_from_edges(
        12,
        &[
            (0, 1),
            (0, 4),
            (0, 6),
            (0, 9),
            (1, 2),
            (1, 5),
            (1, 7),
            (2, 3),
            (2, 6),
            (2, 8),
            (3, 4),
            (3, 7),
            (3, 9),
            (4, 5),
            (4, 8),
            (5, 10),
            (5, 11),
            (6, 10),
            (6, 11),
            (7, 8),
            (7, 11),
            (8, 10),
            (9, 10),
            (9, 11),
        ],
    )
}

/// Places `b` next to `a` with shifted node ids, no shared nodes.
pub fn disjoint_union(a: &UnGraph, b: &UnGraph) -> UnGraph {
    let mut graph = a.clone();
    let offset = a.node_count();
    for u in b.node_indices() {
        graph.add_node((offset + u.index()) as u32);
    }
    for e in b.edge_references() {
        graph.add_edge(
            NodeIndex::new(offset + e.source().index()),
            NodeIndex::new(offset + e.target().index()),
            *e.weight(),
        );
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_graph_shapes() {
        let petersen = petersen_graph();
        assert_eq!(petersen.node_count(), 10);
        assert_eq!(petersen.edge_count(), 15);

        let groetzsch = groetzsch_graph();
        assert_eq!(groetzsch.node_count(), 11);
        assert_eq!(groetzsch.edge_count(), 20);

        let franklin = franklin_graph();
        assert_eq!(franklin.node_count(), 12);
        assert_eq!(franklin.edge_count(), 18);
        for u in franklin.node_indices() {
            assert_eq!(franklin.neighbors(u).count(), 3);
        }

        let chvatal = chvatal_graph();
        assert_eq!(chvatal.node_count(), 12);
        assert_eq!(chvatal.edge_count(), 24);
        for u in chvatal.node_indices() {
            assert_eq!(chvatal.neighbors(u).count(), 4);
        }
    }

    #[test]
    fn test_disjoint_union_shape() {
        let g = disjoint_union(&cycle_graph(3), &path_graph(2));
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
    }
}
