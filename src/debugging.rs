use crate::UnGraph;
use crate::dfs::{DfsTree, EdgeKind, classify_edges};
use petgraph::visit::EdgeRef;

/// Returns a string representation of the graph in dot format.
///
/// Node labels are the weights you gave them, edge labels the costs.
///
/// Use returned string with `neato`.
pub fn draw_graph(g: &UnGraph) -> String {
    let mut dot_str = String::new();
    dot_str.push_str("graph {\n");
    dot_str.push_str("  node [style=filled, shape=ellipse, fillcolor=lightblue];\n");

    for u in g.node_indices() {
        dot_str.push_str(&format!(
            "  {} [label=\"ID:{}\"];\n",
            u.index(),
            g[u]
        ));
    }

    for edge in g.edge_references() {
        let label = match edge.weight() {
            Some(cost) => format!(" [label=\"{}\"]", cost),
            None => String::new(),
        };
        dot_str.push_str(&format!(
            "  {} -- {}{};\n",
            edge.source().index(),
            edge.target().index(),
            label
        ));
    }

    dot_str.push_str("}\n");
    dot_str
}

/// Returns a string representation of a DFS tree in dot format.
///
/// Tree edges are solid and point away from the root, fronds are dotted
/// and point at the ancestor. Roots are colored green.
///
/// Use returned string with `dot` not `neato`.
pub fn draw_dfs_tree(g: &UnGraph, tree: &DfsTree) -> String {
    let kinds = classify_edges(g, tree);

    let mut dot_str = String::new();
    dot_str.push_str("digraph {\n");
    dot_str.push_str("  node [style=filled, shape=ellipse];\n");

    for u in g.node_indices() {
        let color = if tree.is_root(u) { "green" } else { "lightblue" };
        dot_str.push_str(&format!(
            "  {} [label=\"ID:{}\nRANK: {}\", fillcolor={}];\n",
            u.index(),
            g[u],
            tree.rank[u.index()],
            color
        ));
    }

    for edge in g.edge_references() {
        let source_rank = tree.rank[edge.source().index()];
        let target_rank = tree.rank[edge.target().index()];
        let kind = kinds[edge.id().index()];

        // tree edges run downwards, fronds upwards
        let downwards = source_rank < target_rank;
        let (from, to) = match (kind, downwards) {
            (EdgeKind::Tree, true) | (EdgeKind::Frond, false) => {
                (edge.source().index(), edge.target().index())
            }
            _ => (edge.target().index(), edge.source().index()),
        };

        let style = match kind {
            EdgeKind::Frond => "style=\"dotted\"",
            EdgeKind::Tree => "",
        };

        dot_str.push_str(&format!("  {} -> {} [{}];\n", from, to, style));
    }

    dot_str.push_str("}\n");
    dot_str
}
