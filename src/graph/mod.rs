mod spec;
mod tree;

pub use spec::GraphSpec;
pub use tree::{LabelPlacement, NodeId, PlacedTree, TreeNode};
