pub mod embed;
pub mod orient;
pub mod reorder;
pub mod structures;
