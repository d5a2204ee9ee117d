mod circular_queue;
mod iter;
mod tests;

pub use circular_queue::*;
pub use iter::*;
