//! Interfaces to the collaborators the resolver depends on
//!
//! The resolver never touches a storage service or a plugin runtime
//! directly; hosts hand it implementations of these traits.

pub mod plugin_host;
pub mod test_storage;

pub use plugin_host::PluginHost;
pub use test_storage::TestStorage;
