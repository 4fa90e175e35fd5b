//! Plugin registry and resolution
//!
//! Plugins are named by fully-qualified type name in the run arguments and
//! looked up in a registry populated by the host.

pub mod builtins;
mod capability;
mod registry;
mod resolver;

pub use capability::{
    AppLifecycleListener, Capability, ConstructorShape, PluginInstance, RunListener,
    ScreenshotProcessor, TestFilter,
};
pub use registry::{PluginRegistry, PluginType};
pub use resolver::{PluginClass, PluginReference, PluginResolver, Resolved, ResolvedPlugin};
