//! Recognized argument keys
//!
//! These strings cross a process boundary and must not change.

pub const TEST_CLASS: &str = "class";
pub const NOT_TEST_CLASS: &str = "notClass";
pub const TEST_FILE: &str = "testFile";
pub const NOT_TEST_FILE: &str = "notTestFile";
pub const TEST_PACKAGE: &str = "package";
pub const NOT_TEST_PACKAGE: &str = "notPackage";
pub const TEST_SIZE: &str = "size";
pub const ANNOTATION: &str = "annotation";
pub const NOT_ANNOTATION: &str = "notAnnotation";
pub const LOG_ONLY: &str = "log";
pub const DEBUG: &str = "debug";
pub const SUITE_ASSIGNMENT: &str = "suiteAssignment";
pub const COVERAGE: &str = "coverage";
pub const COVERAGE_PATH: &str = "coverageFile";
pub const DELAY_IN_MILLIS: &str = "delay_msec";
pub const TIMEOUT: &str = "timeout_msec";
pub const NUM_SHARDS: &str = "numShards";
pub const SHARD_INDEX: &str = "shardIndex";
pub const DISABLE_ANALYTICS: &str = "disableAnalytics";
pub const LISTENER: &str = "listener";
pub const FILTER: &str = "filter";
pub const RUNNER_BUILDER: &str = "runnerBuilder";
pub const APP_LISTENER: &str = "appListener";
pub const SCREENSHOT_PROCESSORS: &str = "screenCaptureProcessors";
pub const REMOTE_INIT_METHOD: &str = "remoteMethod";
pub const TARGET_PROCESS: &str = "targetProcess";
pub const ORCHESTRATOR_SERVICE: &str = "orchestratorService";
pub const LIST_TESTS_FOR_ORCHESTRATOR: &str = "listTestsForOrchestrator";
pub const ORCHESTRATOR_DISCOVERY_SERVICE: &str = "discoveryService";
pub const ORCHESTRATOR_RUN_EVENTS_SERVICE: &str = "runEventsService";
pub const USE_TEST_STORAGE_SERVICE: &str = "useTestStorageService";
pub const SHELL_EXEC_BINDER_KEY: &str = "shellExecBinderKey";
pub const RUN_LISTENER_NEW_ORDER: &str = "newRunListenerMode";
pub const CLASSPATH_TO_SCAN: &str = "classpathToScan";
pub const TESTS_REGEX: &str = "tests_regex";
pub const TEST_PLATFORM_MIGRATION: &str = "temporaryTestPlatformMigration";

/// Every key the resolver understands
pub const ALL: &[&str] = &[
    TEST_CLASS,
    NOT_TEST_CLASS,
    TEST_FILE,
    NOT_TEST_FILE,
    TEST_PACKAGE,
    NOT_TEST_PACKAGE,
    TEST_SIZE,
    ANNOTATION,
    NOT_ANNOTATION,
    LOG_ONLY,
    DEBUG,
    SUITE_ASSIGNMENT,
    COVERAGE,
    COVERAGE_PATH,
    DELAY_IN_MILLIS,
    TIMEOUT,
    NUM_SHARDS,
    SHARD_INDEX,
    DISABLE_ANALYTICS,
    LISTENER,
    FILTER,
    RUNNER_BUILDER,
    APP_LISTENER,
    SCREENSHOT_PROCESSORS,
    REMOTE_INIT_METHOD,
    TARGET_PROCESS,
    ORCHESTRATOR_SERVICE,
    LIST_TESTS_FOR_ORCHESTRATOR,
    ORCHESTRATOR_DISCOVERY_SERVICE,
    ORCHESTRATOR_RUN_EVENTS_SERVICE,
    USE_TEST_STORAGE_SERVICE,
    SHELL_EXEC_BINDER_KEY,
    RUN_LISTENER_NEW_ORDER,
    CLASSPATH_TO_SCAN,
    TESTS_REGEX,
    TEST_PLATFORM_MIGRATION,
];

pub fn is_recognized(key: &str) -> bool {
    ALL.contains(&key)
}
