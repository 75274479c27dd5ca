//! # planarity
//!
//! A Rust library for analyzing the topological structure of a graph:
//! connected and biconnected decomposition, articulation vertices and a
//! combinatorial planarity test in the Hopcroft–Tarjan family.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! All depth-first traversals run on explicit worklists, so graphs with
//! paths of thousands of nodes do not overflow the call stack.

pub mod biconnected;
pub mod components;
pub mod debugging;
pub mod dfs;
pub mod planarity;
mod planarity_blocks;
pub mod testing;
pub mod types;

pub use biconnected::{find_articulation_vertices, find_biconnected_components};
pub use planarity::is_planar;
pub use types::EdgeCost;
pub use types::UnGraph;
