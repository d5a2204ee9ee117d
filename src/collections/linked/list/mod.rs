mod iter;
mod length;
mod linked_list;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
