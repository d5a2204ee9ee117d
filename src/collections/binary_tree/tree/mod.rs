mod binary_tree;
mod error;
mod node;
mod tests;

pub use binary_tree::*;
pub use error::*;
pub use node::*;
