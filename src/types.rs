/// Optional non-negative cost carried by an edge. The analysis never reads
/// it, only copies it into materialized subgraphs.
pub type EdgeCost = Option<u32>;

/// Wrapper for petgraph's graph type.
pub type UnGraph = petgraph::graph::UnGraph<u32, EdgeCost>;
