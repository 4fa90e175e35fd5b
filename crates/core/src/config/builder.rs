//! Run configuration builder
//!
//! Resolves an [`ArgumentSet`] into a [`RunConfiguration`]: selectors are
//! tokenized, file-backed lists are read, plugins are constructed and every
//! scalar is validated. Any failure aborts the whole resolution.

use std::path::PathBuf;
use tracing::debug;

use super::keys;
use super::{ArgumentSet, DEFAULT_TEST_TIMEOUT, RunConfiguration};
use crate::error::Result;
use crate::interfaces::{PluginHost, TestStorage};
use crate::parser::{
    is_class_or_method, parse_bool, parse_path_list, parse_string_list, parse_test_size,
    parse_unsigned_int, parse_unsigned_long, tokenize,
};
use crate::plugin::{Capability, PluginReference, PluginResolver};
use crate::services::{RawSource, SourceReader};
use crate::types::{Selector, SelectorList};

/// Builds [`RunConfiguration`]s against a plugin host and an optional
/// storage backend. Holds no state between calls.
pub struct RunConfigurationBuilder<'a> {
    host: &'a dyn PluginHost,
    storage: Option<&'a dyn TestStorage>,
}

impl<'a> RunConfigurationBuilder<'a> {
    pub fn new(host: &'a dyn PluginHost) -> Self {
        Self {
            host,
            storage: None,
        }
    }

    pub fn with_storage(mut self, storage: &'a dyn TestStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Resolve every recognized key in `args`
    pub fn resolve(&self, args: &ArgumentSet) -> Result<RunConfiguration> {
        for (key, _) in args.iter().filter(|(key, _)| !keys::is_recognized(key)) {
            debug!("Argument {key} is not a run argument, available as plugin payload only");
        }

        let use_test_storage_service = flag(args, keys::USE_TEST_STORAGE_SERVICE);
        let reader = SourceReader::new(self.storage);
        let resolver = PluginResolver::new(self.host);

        let (tests, test_packages) = self.selection(
            args,
            &reader,
            use_test_storage_service,
            keys::TEST_CLASS,
            keys::TEST_PACKAGE,
            keys::TEST_FILE,
        )?;
        let (not_tests, not_test_packages) = self.selection(
            args,
            &reader,
            use_test_storage_service,
            keys::NOT_TEST_CLASS,
            keys::NOT_TEST_PACKAGE,
            keys::NOT_TEST_FILE,
        )?;

        let config = RunConfiguration {
            tests,
            not_tests,
            test_packages,
            not_test_packages,
            test_size: args
                .get(keys::TEST_SIZE)
                .map(|value| parse_test_size(keys::TEST_SIZE, value))
                .transpose()?,
            annotations: list(args, keys::ANNOTATION),
            not_annotations: list(args, keys::NOT_ANNOTATION),
            classpath_to_scan: args
                .get(keys::CLASSPATH_TO_SCAN)
                .map(parse_path_list)
                .unwrap_or_default(),
            tests_regex: string(args, keys::TESTS_REGEX),

            listeners: resolver
                .resolve_instances(&plugin_references(args, keys::LISTENER, Capability::Listener))?,
            filters: resolver
                .resolve_instances(&plugin_references(args, keys::FILTER, Capability::Filter))?,
            runner_builder_classes: resolver.resolve_classes(&plugin_references(
                args,
                keys::RUNNER_BUILDER,
                Capability::RunnerBuilder,
            ))?,
            app_listeners: resolver.resolve_instances(&plugin_references(
                args,
                keys::APP_LISTENER,
                Capability::AppLifecycleListener,
            ))?,
            screen_capture_processors: resolver.resolve_instances(&plugin_references(
                args,
                keys::SCREENSHOT_PROCESSORS,
                Capability::ScreenshotProcessor,
            ))?,

            test_timeout: args
                .get(keys::TIMEOUT)
                .map(|value| parse_unsigned_long(keys::TIMEOUT, value))
                .transpose()?
                .unwrap_or(DEFAULT_TEST_TIMEOUT),
            num_shards: unsigned_int(args, keys::NUM_SHARDS)?.unwrap_or(0),
            shard_index: unsigned_int(args, keys::SHARD_INDEX)?.unwrap_or(0),
            delay_in_millis: unsigned_int(args, keys::DELAY_IN_MILLIS)?,
            remote_method: args
                .get(keys::REMOTE_INIT_METHOD)
                .map(Selector::parse)
                .transpose()?,
            target_process: string(args, keys::TARGET_PROCESS),
            code_coverage: flag(args, keys::COVERAGE),
            code_coverage_path: string(args, keys::COVERAGE_PATH),

            debug: flag(args, keys::DEBUG),
            log_only: flag(args, keys::LOG_ONLY),
            suite_assignment: flag(args, keys::SUITE_ASSIGNMENT),
            disable_analytics: flag(args, keys::DISABLE_ANALYTICS),
            new_run_listener_mode: flag(args, keys::RUN_LISTENER_NEW_ORDER),
            test_platform_migration: flag(args, keys::TEST_PLATFORM_MIGRATION),

            orchestrator_service: string(args, keys::ORCHESTRATOR_SERVICE),
            list_tests_for_orchestrator: flag(args, keys::LIST_TESTS_FOR_ORCHESTRATOR),
            test_discovery_service: string(args, keys::ORCHESTRATOR_DISCOVERY_SERVICE),
            test_run_events_service: string(args, keys::ORCHESTRATOR_RUN_EVENTS_SERVICE),
            shell_exec_binder_key: string(args, keys::SHELL_EXEC_BINDER_KEY),
            use_test_storage_service,
        };

        debug!(
            "Resolved {} tests, {} excluded tests, {} packages, {} excluded packages",
            config.tests.len(),
            config.not_tests.len(),
            config.test_packages.len(),
            config.not_test_packages.len()
        );
        Ok(config)
    }

    /// Inline selectors and packages first, then whatever the list file adds,
    /// in file order
    fn selection(
        &self,
        args: &ArgumentSet,
        reader: &SourceReader<'_>,
        use_test_storage_service: bool,
        class_key: &str,
        package_key: &str,
        file_key: &str,
    ) -> Result<(SelectorList, Vec<String>)> {
        let mut selectors = args.get(class_key).map(tokenize).unwrap_or_default();
        let mut packages = list(args, package_key);

        if let Some(file) = args.get(file_key) {
            let source = if use_test_storage_service {
                RawSource::StorageKey(file.to_string())
            } else {
                RawSource::FilePath(PathBuf::from(file))
            };
            let lines = reader.read_list(&source, use_test_storage_service)?;
            debug!("Read {} entries for {file_key} from {file}", lines.len());

            for line in lines {
                if is_class_or_method(&line) {
                    selectors.extend(tokenize(&line));
                } else {
                    packages.extend(parse_string_list(&line));
                }
            }
        }

        Ok((selectors, packages))
    }
}

fn flag(args: &ArgumentSet, key: &str) -> bool {
    args.get(key).is_some_and(parse_bool)
}

fn string(args: &ArgumentSet, key: &str) -> Option<String> {
    args.get(key).map(str::to_string)
}

fn list(args: &ArgumentSet, key: &str) -> Vec<String> {
    args.get(key).map(parse_string_list).unwrap_or_default()
}

fn unsigned_int(args: &ArgumentSet, key: &str) -> Result<Option<u32>> {
    args.get(key)
        .map(|value| parse_unsigned_int(key, value))
        .transpose()
}

/// Plugin names are comma separated; a plugin's payload is the argument
/// keyed by its own type name
fn plugin_references(args: &ArgumentSet, key: &str, required: Capability) -> Vec<PluginReference> {
    list(args, key)
        .into_iter()
        .map(|type_name| {
            let payload = args.get(&type_name).map(str::to_string);
            PluginReference {
                type_name,
                required,
                constructor_args: payload,
            }
        })
        .collect()
}
