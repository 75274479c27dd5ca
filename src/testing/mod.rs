pub mod grids;
pub mod named_graphs;
pub mod random_graphs;
