//! Default configuration values

/// Configuration file name at the project root
pub const CONFIG_FILE: &str = "buildwatch.toml";

/// Default build configuration name
pub const DEFAULT_CONFIGURATION: &str = "Debug";

/// Default flag used to pass the configuration name to the build tool
pub const DEFAULT_CONFIGURATION_FLAG: &str = "--configuration";

/// Default logs directory, relative to the project root
pub const DEFAULT_LOGS_DIR: &str = ".buildwatch/logs";

/// Default reload stamp file, relative to the project root
pub const DEFAULT_STAMP_FILE: &str = ".buildwatch/loaded.stamp";

/// Default address of the running instrumented process
pub const DEFAULT_NOTIFY_ADDR: &str = "127.0.0.1:6101";

/// Default debounce delay before the reload trigger fires (in milliseconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
