use crate::UnGraph;
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::VecDeque;

/// Partitions the nodes into maximal connected sets via BFS.
pub fn connected_components(graph: &UnGraph) -> Vec<Vec<NodeIndex>> {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut parts = Vec::new();

    for start in graph.node_indices() {
        if visited.contains(start.index()) {
            continue;
        }
        visited.insert(start.index());
        let mut part = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors(u) {
                if !visited.contains(v.index()) {
                    visited.insert(v.index());
                    part.push(v);
                    queue.push_back(v);
                }
            }
        }
        parts.push(part);
    }

    parts
}

/// Materializes one induced subgraph per connected component. Node weights
/// of the subgraphs carry the original node indices, edge costs are copied.
/// Planarity and biconnectivity are independent per component, so stages
/// downstream of this never see a disconnected graph.
pub fn connected_components_as_subgraphs(graph: &UnGraph) -> Vec<UnGraph> {
    let parts = connected_components(graph);
    let mut part_of = vec![usize::MAX; graph.node_count()];
    for (i, part) in parts.iter().enumerate() {
        for &u in part {
            part_of[u.index()] = i;
        }
    }

    let mut subgraphs = Vec::with_capacity(parts.len());
    let mut to_local: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    for part in &parts {
        let mut sub = UnGraph::new_undirected();
        for &u in part {
            let local = sub.add_node(u.index() as u32);
            to_local.insert(u, local);
        }
        subgraphs.push(sub);
    }
    for e in graph.edge_references() {
        let sub = &mut subgraphs[part_of[e.source().index()]];
        sub.add_edge(to_local[&e.source()], to_local[&e.target()], *e.weight());
    }

    subgraphs
}
