pub mod json_tree;
pub mod models;

pub use models::*;
