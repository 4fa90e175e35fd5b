//! Plugin resolution
//!
//! Turns plugin references from the run arguments into constructed
//! instances (or class handles for runner builders), validating the
//! capability and constructor shape on the way.

use serde::{Serialize, Serializer};
use tracing::debug;

use super::{Capability, ConstructorShape, PluginInstance};
use crate::error::{Error, Result};
use crate::interfaces::PluginHost;

/// A plugin named in the run arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginReference {
    pub type_name: String,
    pub required: Capability,
    pub constructor_args: Option<String>,
}

impl PluginReference {
    pub fn new(type_name: impl Into<String>, required: Capability) -> Self {
        Self {
            type_name: type_name.into(),
            required,
            constructor_args: None,
        }
    }

    pub fn with_constructor_args(mut self, args: impl Into<String>) -> Self {
        self.constructor_args = Some(args.into());
        self
    }
}

/// A constructed plugin together with what it was built from.
///
/// Two resolved plugins are equal when they were built from the same type
/// name and payload.
#[derive(Debug, Clone)]
pub struct ResolvedPlugin {
    type_name: String,
    constructor_args: Option<String>,
    instance: PluginInstance,
}

impl ResolvedPlugin {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn constructor_args(&self) -> Option<&str> {
        self.constructor_args.as_deref()
    }

    pub fn instance(&self) -> &PluginInstance {
        &self.instance
    }
}

impl PartialEq for ResolvedPlugin {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.constructor_args == other.constructor_args
    }
}

impl Eq for ResolvedPlugin {}

impl Serialize for ResolvedPlugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.type_name)
    }
}

/// A validated plugin type that the execution engine instantiates itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginClass {
    type_name: String,
}

impl PluginClass {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Outcome of resolving a single reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Instance(ResolvedPlugin),
    Class(PluginClass),
}

/// Resolves references against a [`PluginHost`]. Nothing is cached: every
/// reference is looked up and constructed on its own.
pub struct PluginResolver<'a> {
    host: &'a dyn PluginHost,
}

impl<'a> PluginResolver<'a> {
    pub fn new(host: &'a dyn PluginHost) -> Self {
        Self { host }
    }

    /// Resolve to an instance or a class handle depending on the capability
    pub fn resolve(&self, reference: &PluginReference) -> Result<Resolved> {
        if reference.required.is_instantiable() {
            self.resolve_instance(reference).map(Resolved::Instance)
        } else {
            self.resolve_class(reference).map(Resolved::Class)
        }
    }

    /// Validate the reference and return a class handle without constructing
    pub fn resolve_class(&self, reference: &PluginReference) -> Result<PluginClass> {
        self.checked_type(reference)?;
        Ok(PluginClass {
            type_name: reference.type_name.clone(),
        })
    }

    /// Validate and construct the referenced plugin
    pub fn resolve_instance(&self, reference: &PluginReference) -> Result<ResolvedPlugin> {
        let plugin_type = self.checked_type(reference)?;
        let payload = reference.constructor_args.as_deref();
        let instance = plugin_type.instantiate(payload)?;

        if instance.capability() != reference.required {
            let shape = if payload.is_some() {
                ConstructorShape::Payload
            } else {
                ConstructorShape::NoArgument
            };
            return Err(plugin_type.construction_error(
                shape,
                format!(
                    "constructor produced a {} instead of a {}",
                    instance.capability(),
                    reference.required
                ),
            ));
        }

        debug!(
            "Constructed {} plugin {}",
            reference.required, reference.type_name
        );
        Ok(ResolvedPlugin {
            type_name: reference.type_name.clone(),
            constructor_args: reference.constructor_args.clone(),
            instance,
        })
    }

    /// Resolve several references, keeping their order
    pub fn resolve_instances(&self, references: &[PluginReference]) -> Result<Vec<ResolvedPlugin>> {
        references
            .iter()
            .map(|reference| self.resolve_instance(reference))
            .collect()
    }

    pub fn resolve_classes(&self, references: &[PluginReference]) -> Result<Vec<PluginClass>> {
        references
            .iter()
            .map(|reference| self.resolve_class(reference))
            .collect()
    }

    fn checked_type(&self, reference: &PluginReference) -> Result<&'a super::PluginType> {
        let plugin_type =
            self.host
                .load_type(&reference.type_name)
                .ok_or_else(|| Error::PluginNotFound {
                    type_name: reference.type_name.clone(),
                })?;

        if !plugin_type.provides(reference.required) {
            return Err(Error::PluginCapabilityMismatch {
                type_name: reference.type_name.clone(),
                capability: reference.required,
            });
        }
        Ok(plugin_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{PluginRegistry, PluginType, RunListener, TestFilter};
    use crate::types::Selector;

    #[derive(Debug)]
    struct NamedFilter(String);

    impl TestFilter for NamedFilter {
        fn should_run(&self, selector: &Selector) -> bool {
            selector.qualified_name == self.0
        }

        fn describe(&self) -> String {
            format!("only {}", self.0)
        }
    }

    #[derive(Debug)]
    struct QuietListener;

    impl RunListener for QuietListener {}

    fn registry() -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        registry
            .register(
                PluginType::new("com.example.CustomTestFilter", [Capability::Filter])
                    .with_constructor(|| Ok(PluginInstance::filter(NamedFilter("any".into())))),
            )
            .register(
                PluginType::new("com.example.CustomTestFilterTakesPayload", [Capability::Filter])
                    .with_payload_constructor(|payload| {
                        Ok(PluginInstance::filter(NamedFilter(payload.to_string())))
                    }),
            )
            .register(PluginType::new(
                "com.example.CustomRunnerBuilder",
                [Capability::RunnerBuilder],
            ))
            .register(
                PluginType::new("com.example.Confused", [Capability::Filter])
                    .with_constructor(|| Ok(PluginInstance::listener(QuietListener))),
            );
        registry
    }

    #[test]
    fn test_resolve_filter_with_no_argument_constructor() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let plugin = resolver
            .resolve_instance(&PluginReference::new(
                "com.example.CustomTestFilter",
                Capability::Filter,
            ))
            .unwrap();
        assert_eq!(plugin.type_name(), "com.example.CustomTestFilter");
        assert!(plugin.instance().as_filter().is_some());
    }

    #[test]
    fn test_resolve_filter_with_payload() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let reference =
            PluginReference::new("com.example.CustomTestFilterTakesPayload", Capability::Filter)
                .with_constructor_args("test");
        let plugin = resolver.resolve_instance(&reference).unwrap();
        let filter = plugin.instance().as_filter().unwrap();
        assert_eq!(filter.describe(), "only test");
        assert_eq!(plugin.constructor_args(), Some("test"));
    }

    #[test]
    fn test_missing_type() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let err = resolver
            .resolve(&PluginReference::new("com.example.Nope", Capability::Listener))
            .unwrap_err();
        assert!(matches!(err, Error::PluginNotFound { ref type_name } if type_name == "com.example.Nope"));
    }

    #[test]
    fn test_capability_mismatch_names_type_and_contract() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let err = resolver
            .resolve(&PluginReference::new(
                "com.example.CustomTestFilter",
                Capability::RunnerBuilder,
            ))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "com.example.CustomTestFilter does not extend RunnerBuilder"
        );
    }

    #[test]
    fn test_missing_no_argument_constructor() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let err = resolver
            .resolve_instance(&PluginReference::new(
                "com.example.CustomTestFilterTakesPayload",
                Capability::Filter,
            ))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("no argument constructor"));
        assert!(message.contains("com.example.CustomTestFilterTakesPayload"));
    }

    #[test]
    fn test_constructor_producing_wrong_contract() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let err = resolver
            .resolve_instance(&PluginReference::new("com.example.Confused", Capability::Filter))
            .unwrap_err();
        assert!(matches!(err, Error::PluginConstructionError { .. }));
        assert!(err.to_string().contains("produced a RunListener instead of a Filter"));
    }

    #[test]
    fn test_runner_builder_resolves_to_class() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let resolved = resolver
            .resolve(&PluginReference::new(
                "com.example.CustomRunnerBuilder",
                Capability::RunnerBuilder,
            ))
            .unwrap();
        match resolved {
            Resolved::Class(class) => assert_eq!(class.type_name(), "com.example.CustomRunnerBuilder"),
            Resolved::Instance(_) => panic!("runner builders must not be instantiated"),
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let registry = registry();
        let resolver = PluginResolver::new(&registry);
        let plugins = resolver
            .resolve_instances(&[
                PluginReference::new("com.example.CustomTestFilterTakesPayload", Capability::Filter)
                    .with_constructor_args("x"),
                PluginReference::new("com.example.CustomTestFilter", Capability::Filter),
                PluginReference::new("com.example.CustomTestFilter", Capability::Filter),
            ])
            .unwrap();
        let names: Vec<&str> = plugins.iter().map(ResolvedPlugin::type_name).collect();
        assert_eq!(
            names,
            vec![
                "com.example.CustomTestFilterTakesPayload",
                "com.example.CustomTestFilter",
                "com.example.CustomTestFilter",
            ]
        );
    }
}
