use hashbrown::HashMap;
use petgraph::graph::EdgeIndex;

use crate::{
    UnGraph,
    biconnected::find_biconnected_components,
    components::connected_components_as_subgraphs,
    planarity_blocks::{
        embed::embed_fronds,
        orient::orient,
        reorder::reorder_adjacency,
        structures::{ComponentGraph, EmbeddingState},
    },
};

/// Determines whether the graph is planar.
///
/// Connected components are planar independently of each other, and so are
/// the biconnected components within them, so the graph decomposes all the
/// way down to blocks before any real work happens. Each block gets the
/// cheap Euler-formula shortcuts and, when those don't settle it, the full
/// lowpoint/reorder/frond-embedding test. The first non-planar block
/// decides the whole graph.
///
/// The input is only read; repeated calls return the same verdict.
pub fn is_planar(graph: &UnGraph) -> bool {
    for component in connected_components_as_subgraphs(graph) {
        let n = component.node_count();
        let m = component.edge_count();
        if n <= 4 {
            continue;
        }
        if m > 3 * (n - 2) {
            return false;
        }
        for block in find_biconnected_components(&component) {
            if !block_is_planar(&component, &block) {
                return false;
            }
        }
    }
    true
}

fn dense_id(map: &mut HashMap<usize, usize>, key: usize) -> usize {
    let next = map.len();
    *map.entry(key).or_insert(next)
}

/// Tests one biconnected component, given as its edge list.
fn block_is_planar(graph: &UnGraph, block: &[EdgeIndex]) -> bool {
    let mut to_dense: HashMap<usize, usize> = HashMap::new();
    let mut endpoints = Vec::with_capacity(block.len());
    for &eid in block {
        let (a, b) = graph
            .edge_endpoints(eid)
            .expect("block edge missing from the graph");
        endpoints.push((
            dense_id(&mut to_dense, a.index()),
            dense_id(&mut to_dense, b.index()),
        ));
    }

    let n = to_dense.len();
    let m = endpoints.len();

    // every simple graph on up to 4 nodes fits in the plane (K4 does)
    if n <= 4 {
        return true;
    }
    if m > 3 * (n - 2) {
        return false;
    }

    let mut g = ComponentGraph::new(n, m);
    for (u, v) in endpoints {
        g.add_edge(u, v);
    }

    orient(&mut g, 0);
    reorder_adjacency(&mut g);

    let mut state = EmbeddingState::new(g.m);
    embed_fronds(&g, &mut state, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::grids::generate_grid_graph;
    use crate::testing::named_graphs::{
        chvatal_graph, complete_bipartite_graph, complete_graph, cycle_graph, disjoint_union,
        franklin_graph, groetzsch_graph, petersen_graph, wheel_graph,
    };
    use crate::testing::random_graphs::random_graph;
    use petgraph::visit::EdgeRef;

    #[test]
    fn test_k5_is_not_planar() {
        assert!(!is_planar(&complete_graph(5)));
    }

    #[test]
    fn test_k33_is_not_planar() {
        assert!(!is_planar(&complete_bipartite_graph(3, 3)));
    }

    #[test]
    fn test_k4_is_planar() {
        assert!(is_planar(&complete_graph(4)));
    }

    #[test]
    fn test_k5_minus_an_edge_is_planar() {
        let mut g = complete_graph(5);
        let e = g.edge_indices().next().unwrap();
        g.remove_edge(e);
        assert!(is_planar(&g));
    }

    #[test]
    fn test_triangle_with_disjoint_k5() {
        let g = disjoint_union(&cycle_graph(3), &complete_graph(5));
        assert!(!is_planar(&g));
    }

    #[test]
    fn test_cycles_are_planar() {
        for n in [3, 4, 5, 10, 100, 1000] {
            assert!(is_planar(&cycle_graph(n)), "C{} should be planar", n);
        }
    }

    #[test]
    fn test_named_nonplanar_graphs() {
        assert!(!is_planar(&petersen_graph()));
        assert!(!is_planar(&groetzsch_graph()));
        assert!(!is_planar(&franklin_graph()));
        assert!(!is_planar(&chvatal_graph()));
    }

    #[test]
    fn test_grids_are_planar() {
        assert!(is_planar(&generate_grid_graph(2, 2)));
        assert!(is_planar(&generate_grid_graph(5, 5)));
        assert!(is_planar(&generate_grid_graph(20, 20)));
    }

    #[test]
    fn test_wheels_are_planar() {
        assert!(is_planar(&wheel_graph(6)));
        assert!(is_planar(&wheel_graph(50)));
    }

    #[test]
    fn test_disconnected_planar_graphs() {
        let g = disjoint_union(&cycle_graph(3), &cycle_graph(3));
        assert!(is_planar(&g));
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = UnGraph::new_undirected();
        assert!(is_planar(&empty));

        let mut single = UnGraph::new_undirected();
        single.add_node(0);
        assert!(is_planar(&single));
    }

    #[test]
    fn test_dense_graph_shortcut() {
        // 7 nodes, 16 > 3 * 5 edges, dies on the Euler bound
        let g = random_graph(7, 16, 1);
        assert!(!is_planar(&g));
    }

    #[test]
    fn test_nonplanar_with_planar_padding() {
        let g = disjoint_union(&complete_graph(5), &generate_grid_graph(4, 4));
        assert!(!is_planar(&g));
    }

    #[test]
    fn test_idempotent_and_non_mutating() {
        let g = petersen_graph();
        let nodes = g.node_count();
        let edges: Vec<_> = g
            .edge_references()
            .map(|e| (e.source(), e.target()))
            .collect();

        assert_eq!(is_planar(&g), is_planar(&g));

        assert_eq!(g.node_count(), nodes);
        let edges_after: Vec<_> = g
            .edge_references()
            .map(|e| (e.source(), e.target()))
            .collect();
        assert_eq!(edges, edges_after);
    }

    #[test]
    fn test_random_planar_by_construction() {
        // trees plus one chord stay planar: any single cycle does
        for seed in 0..20 {
            let g = random_graph(30, 30, seed);
            assert!(is_planar(&g), "seed {}", seed);
        }
    }
}
