//! Run argument configuration
//!
//! Raw arguments, the key contract, and the builder that turns them into a
//! [`RunConfiguration`].

mod arguments;
mod builder;
pub mod keys;
mod run_configuration;

pub use arguments::ArgumentSet;
pub use builder::RunConfigurationBuilder;
pub use run_configuration::{DEFAULT_TEST_TIMEOUT, RunConfiguration};
