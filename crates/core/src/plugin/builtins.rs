//! Plugins shipped with runargs

use anyhow::Context;
use regex::Regex;
use tracing::info;

use super::{Capability, PluginInstance, PluginRegistry, PluginType, RunListener, TestFilter};
use crate::types::Selector;

pub const LOGGING_RUN_LISTENER: &str = "runargs.listener.LoggingRunListener";
pub const REGEX_FILTER: &str = "runargs.filter.RegexFilter";
pub const DEFAULT_RUNNER_BUILDER: &str = "runargs.builder.DefaultRunnerBuilder";

/// Logs run progress through `tracing`
#[derive(Debug, Default)]
pub struct LoggingRunListener;

impl RunListener for LoggingRunListener {
    fn test_run_started(&self, planned: usize) {
        info!("Test run started with {} tests", planned);
    }

    fn test_started(&self, selector: &Selector) {
        info!("Started {}", selector);
    }

    fn test_failure(&self, selector: &Selector, message: &str) {
        info!("Failed {}: {}", selector, message);
    }

    fn test_finished(&self, selector: &Selector) {
        info!("Finished {}", selector);
    }

    fn test_run_finished(&self, run: usize, failed: usize) {
        info!("Test run finished: {} run, {} failed", run, failed);
    }
}

/// Runs only tests whose `Class#member` text matches a pattern
#[derive(Debug)]
pub struct RegexFilter {
    pattern: Regex,
}

impl RegexFilter {
    pub fn new(pattern: &str) -> anyhow::Result<Self> {
        let pattern =
            Regex::new(pattern).with_context(|| format!("invalid filter pattern '{pattern}'"))?;
        Ok(Self { pattern })
    }
}

impl TestFilter for RegexFilter {
    fn should_run(&self, selector: &Selector) -> bool {
        self.pattern.is_match(&selector.to_string())
    }

    fn describe(&self) -> String {
        format!("tests matching {}", self.pattern.as_str())
    }
}

pub(crate) fn register_builtins(registry: &mut PluginRegistry) {
    registry
        .register(
            PluginType::new(LOGGING_RUN_LISTENER, [Capability::Listener])
                .with_constructor(|| Ok(PluginInstance::listener(LoggingRunListener))),
        )
        .register(
            PluginType::new(REGEX_FILTER, [Capability::Filter]).with_payload_constructor(
                |payload| Ok(PluginInstance::filter(RegexFilter::new(payload)?)),
            ),
        )
        .register(PluginType::new(DEFAULT_RUNNER_BUILDER, [Capability::RunnerBuilder]));
}
