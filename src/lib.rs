//! Host package for the cross-crate integration tests in `tests/`.

pub use runargs_core::*;
