//! Capabilities a plugin type can provide and the contracts behind them

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::types::Selector;

/// The base contract a plugin reference must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Filter,
    RunnerBuilder,
    Listener,
    AppLifecycleListener,
    ScreenshotProcessor,
}

impl Capability {
    /// Name of the contract, as shown in diagnostics
    pub fn contract_name(&self) -> &'static str {
        match self {
            Capability::Filter => "Filter",
            Capability::RunnerBuilder => "RunnerBuilder",
            Capability::Listener => "RunListener",
            Capability::AppLifecycleListener => "ApplicationLifecycleCallback",
            Capability::ScreenshotProcessor => "ScreenCaptureProcessor",
        }
    }

    /// Runner builders are handed over as class handles; everything else is
    /// constructed during resolution.
    pub fn is_instantiable(&self) -> bool {
        !matches!(self, Capability::RunnerBuilder)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contract_name())
    }
}

/// Which constructor a plugin reference needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorShape {
    NoArgument,
    Payload,
}

impl fmt::Display for ConstructorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorShape::NoArgument => f.write_str("no argument constructor"),
            ConstructorShape::Payload => f.write_str("a constructor taking its argument payload"),
        }
    }
}

/// Decides which tests take part in a run
pub trait TestFilter: Send + Sync + fmt::Debug {
    fn should_run(&self, selector: &Selector) -> bool;

    fn describe(&self) -> String;
}

/// Observes test run progress
pub trait RunListener: Send + Sync + fmt::Debug {
    fn test_run_started(&self, _planned: usize) {}

    fn test_started(&self, _selector: &Selector) {}

    fn test_failure(&self, _selector: &Selector, _message: &str) {}

    fn test_finished(&self, _selector: &Selector) {}

    fn test_run_finished(&self, _run: usize, _failed: usize) {}
}

/// Hooks around creation of the application under test
pub trait AppLifecycleListener: Send + Sync + fmt::Debug {
    fn before_application_create(&self) {}

    fn after_application_create(&self) {}
}

/// Post-processes captured screenshots, returning where each one was stored
pub trait ScreenshotProcessor: Send + Sync + fmt::Debug {
    fn process(&self, name: &str, image: &[u8]) -> anyhow::Result<String>;
}

/// A constructed plugin, tagged with the contract it implements
#[derive(Debug, Clone)]
pub enum PluginInstance {
    Filter(Arc<dyn TestFilter>),
    Listener(Arc<dyn RunListener>),
    AppLifecycleListener(Arc<dyn AppLifecycleListener>),
    ScreenshotProcessor(Arc<dyn ScreenshotProcessor>),
}

impl PluginInstance {
    pub fn filter(filter: impl TestFilter + 'static) -> Self {
        PluginInstance::Filter(Arc::new(filter))
    }

    pub fn listener(listener: impl RunListener + 'static) -> Self {
        PluginInstance::Listener(Arc::new(listener))
    }

    pub fn app_lifecycle_listener(listener: impl AppLifecycleListener + 'static) -> Self {
        PluginInstance::AppLifecycleListener(Arc::new(listener))
    }

    pub fn screenshot_processor(processor: impl ScreenshotProcessor + 'static) -> Self {
        PluginInstance::ScreenshotProcessor(Arc::new(processor))
    }

    pub fn capability(&self) -> Capability {
        match self {
            PluginInstance::Filter(_) => Capability::Filter,
            PluginInstance::Listener(_) => Capability::Listener,
            PluginInstance::AppLifecycleListener(_) => Capability::AppLifecycleListener,
            PluginInstance::ScreenshotProcessor(_) => Capability::ScreenshotProcessor,
        }
    }

    pub fn as_filter(&self) -> Option<&Arc<dyn TestFilter>> {
        match self {
            PluginInstance::Filter(filter) => Some(filter),
            _ => None,
        }
    }

    pub fn as_listener(&self) -> Option<&Arc<dyn RunListener>> {
        match self {
            PluginInstance::Listener(listener) => Some(listener),
            _ => None,
        }
    }

    pub fn as_app_lifecycle_listener(&self) -> Option<&Arc<dyn AppLifecycleListener>> {
        match self {
            PluginInstance::AppLifecycleListener(listener) => Some(listener),
            _ => None,
        }
    }

    pub fn as_screenshot_processor(&self) -> Option<&Arc<dyn ScreenshotProcessor>> {
        match self {
            PluginInstance::ScreenshotProcessor(processor) => Some(processor),
            _ => None,
        }
    }
}
