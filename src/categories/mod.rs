// Re-export all types and the builders
pub use normalize::{decode, normalize};
pub use tree::{build_tree, find_name_by_id};
pub use types::*;

mod normalize;
mod tree;
pub mod types;
