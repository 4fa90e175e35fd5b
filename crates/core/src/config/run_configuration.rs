use serde::Serialize;

use crate::plugin::{PluginClass, ResolvedPlugin};
use crate::types::{Selector, SelectorList, TestSize};

/// Timeout used when `timeout_msec` is absent; zero means no timeout
pub const DEFAULT_TEST_TIMEOUT: u64 = 0;

/// The resolved, validated arguments for one test run.
///
/// Built once by [`RunConfigurationBuilder`](super::RunConfigurationBuilder)
/// and handed to the execution engine, which only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfiguration {
    // Selection
    pub tests: SelectorList,
    pub not_tests: SelectorList,
    pub test_packages: Vec<String>,
    pub not_test_packages: Vec<String>,
    pub test_size: Option<TestSize>,
    pub annotations: Vec<String>,
    pub not_annotations: Vec<String>,
    pub classpath_to_scan: Vec<String>,
    pub tests_regex: Option<String>,

    // Plugins
    pub listeners: Vec<ResolvedPlugin>,
    pub filters: Vec<ResolvedPlugin>,
    pub runner_builder_classes: Vec<PluginClass>,
    pub app_listeners: Vec<ResolvedPlugin>,
    pub screen_capture_processors: Vec<ResolvedPlugin>,

    // Execution
    pub test_timeout: u64,
    pub num_shards: u32,
    pub shard_index: u32,
    pub delay_in_millis: Option<u32>,
    pub remote_method: Option<Selector>,
    pub target_process: Option<String>,
    pub code_coverage: bool,
    pub code_coverage_path: Option<String>,

    // Flags
    pub debug: bool,
    pub log_only: bool,
    pub suite_assignment: bool,
    pub disable_analytics: bool,
    pub new_run_listener_mode: bool,
    pub test_platform_migration: bool,

    // Orchestration
    pub orchestrator_service: Option<String>,
    pub list_tests_for_orchestrator: bool,
    pub test_discovery_service: Option<String>,
    pub test_run_events_service: Option<String>,
    pub shell_exec_binder_key: Option<String>,
    pub use_test_storage_service: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            tests: Vec::new(),
            not_tests: Vec::new(),
            test_packages: Vec::new(),
            not_test_packages: Vec::new(),
            test_size: None,
            annotations: Vec::new(),
            not_annotations: Vec::new(),
            classpath_to_scan: Vec::new(),
            tests_regex: None,
            listeners: Vec::new(),
            filters: Vec::new(),
            runner_builder_classes: Vec::new(),
            app_listeners: Vec::new(),
            screen_capture_processors: Vec::new(),
            test_timeout: DEFAULT_TEST_TIMEOUT,
            num_shards: 0,
            shard_index: 0,
            delay_in_millis: None,
            remote_method: None,
            target_process: None,
            code_coverage: false,
            code_coverage_path: None,
            debug: false,
            log_only: false,
            suite_assignment: false,
            disable_analytics: false,
            new_run_listener_mode: false,
            test_platform_migration: false,
            orchestrator_service: None,
            list_tests_for_orchestrator: false,
            test_discovery_service: None,
            test_run_events_service: None,
            shell_exec_binder_key: None,
            use_test_storage_service: false,
        }
    }
}

impl RunConfiguration {
    /// Whether the run is split across several shards
    pub fn is_sharded(&self) -> bool {
        self.num_shards > 0
    }

    /// Whether any include or exclude selection was given
    pub fn has_selection(&self) -> bool {
        !(self.tests.is_empty()
            && self.not_tests.is_empty()
            && self.test_packages.is_empty()
            && self.not_test_packages.is_empty())
    }
}
