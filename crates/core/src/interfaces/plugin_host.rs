//! Plugin host interface
//!
//! Replaces loading types by name at runtime with an explicit lookup into
//! whatever the host has registered.

use crate::plugin::PluginType;

/// Looks up plugin types by fully-qualified name
pub trait PluginHost {
    /// Get the registered type for `name`, if any
    fn load_type(&self, name: &str) -> Option<&PluginType>;
}
