//! Plugin registry
//!
//! Maps fully-qualified type names to the capabilities they provide and the
//! constructors that build them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::{Capability, ConstructorShape, PluginInstance};
use crate::error::{Error, Result};
use crate::interfaces::PluginHost;

type Constructor = Arc<dyn Fn() -> anyhow::Result<PluginInstance> + Send + Sync>;
type PayloadConstructor = Arc<dyn Fn(&str) -> anyhow::Result<PluginInstance> + Send + Sync>;

/// A registered plugin type
#[derive(Clone)]
pub struct PluginType {
    name: String,
    capabilities: Vec<Capability>,
    constructor: Option<Constructor>,
    payload_constructor: Option<PayloadConstructor>,
}

impl PluginType {
    pub fn new(name: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            name: name.into(),
            capabilities: capabilities.into_iter().collect(),
            constructor: None,
            payload_constructor: None,
        }
    }

    /// Register the constructor used when no payload is supplied
    pub fn with_constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn() -> anyhow::Result<PluginInstance> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(constructor));
        self
    }

    /// Register the constructor used when the arguments carry a payload for
    /// this type
    pub fn with_payload_constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<PluginInstance> + Send + Sync + 'static,
    {
        self.payload_constructor = Some(Arc::new(constructor));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn provides(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Build an instance, choosing the constructor by whether a payload is
    /// present. The chosen constructor must exist.
    pub fn instantiate(&self, payload: Option<&str>) -> Result<PluginInstance> {
        let (shape, built) = match payload {
            Some(payload) => (
                ConstructorShape::Payload,
                self.payload_constructor
                    .as_ref()
                    .map(|construct| construct(payload)),
            ),
            None => (
                ConstructorShape::NoArgument,
                self.constructor.as_ref().map(|construct| construct()),
            ),
        };

        match built {
            Some(Ok(instance)) => Ok(instance),
            Some(Err(e)) => Err(self.construction_error(shape, format!("constructor failed: {e:#}"))),
            None => Err(self.construction_error(shape, "constructor not registered".to_string())),
        }
    }

    pub(crate) fn construction_error(&self, shape: ConstructorShape, reason: String) -> Error {
        Error::PluginConstructionError {
            type_name: self.name.clone(),
            shape,
            reason,
        }
    }
}

impl fmt::Debug for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginType")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .field("constructor", &self.constructor.is_some())
            .field("payload_constructor", &self.payload_constructor.is_some())
            .finish()
    }
}

/// In-memory [`PluginHost`] keyed by type name
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    types: HashMap<String, PluginType>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the plugins shipped in this crate
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        super::builtins::register_builtins(&mut registry);
        registry
    }

    /// Register a type, replacing any previous type with the same name
    pub fn register(&mut self, plugin_type: PluginType) -> &mut Self {
        debug!(
            "Registering plugin {} with capabilities {:?}",
            plugin_type.name, plugin_type.capabilities
        );
        if let Some(previous) = self.types.insert(plugin_type.name.clone(), plugin_type) {
            debug!("Replaced previously registered plugin {}", previous.name);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl PluginHost for PluginRegistry {
    fn load_type(&self, name: &str) -> Option<&PluginType> {
        self.types.get(name)
    }
}
