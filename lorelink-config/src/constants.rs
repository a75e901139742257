//! Well-known names and default values for configuration.

/// File name looked up in the user config directory and the workspace.
pub const CONFIG_FILE_NAME: &str = "lorelink.toml";

/// Directory under the platform config dir that holds the user file.
pub const APP_CONFIG_DIR: &str = "lorelink";

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "LORELINK_CONFIG_PATH";

/// Tracing targets enabled when `[debug].trace_targets` is empty.
pub const DEFAULT_TRACE_TARGETS: &[&str] = &["lorelink", "lorelink_core", "lorelink_config"];
