//! Application-wide constants
//!
//! Limits of the fixed-width result types and defaults used by the CLI and
//! configuration loader.

/// Limits of the arithmetic operations
pub mod limits {
    /// Largest `n` whose factorial fits in a `u128`
    pub const MAX_FACTORIAL_INPUT: i64 = 34;
}

/// Configuration defaults
pub mod config {
    /// Directory under the home directory holding the configuration file
    pub const CONFIG_DIR_NAME: &str = ".numprops";

    /// Configuration file name
    pub const CONFIG_FILE_NAME: &str = "config.yaml";
}

/// Logging defaults
pub mod logging {
    /// Filter used when neither `RUST_LOG` nor `--verbose` is set
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with a single `--verbose`
    pub const VERBOSE_FILTER: &str = "info";

    /// Filter used with `-vv` or more
    pub const DEBUG_FILTER: &str = "debug";
}
