pub mod selector;
pub mod test_size;

pub use selector::{Selector, SelectorList};
pub use test_size::TestSize;
