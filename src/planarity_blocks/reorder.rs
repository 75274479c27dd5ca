use crate::planarity_blocks::structures::ComponentGraph;

/// Rebuilds every adjacency list in ascending weight order. Each list ends
/// up keyed by the edge's low point, fronds before tree branches at equal
/// weight, so the later embedding walk meets the least constrained edge
/// first.
pub fn reorder_adjacency(g: &mut ComponentGraph) {
    let mut order: Vec<usize> = (0..g.m).collect();
    radsort::sort_by_key(&mut order, |&eid| {
        (g.weight[eid] << 1) | g.is_tree_edge(eid) as usize
    });

    let mut new_adj = vec![Vec::new(); g.n];
    for eid in order {
        let (source, _) = g.edges[eid];
        new_adj[source].push(eid);
    }
    g.adj = new_adj;
}
