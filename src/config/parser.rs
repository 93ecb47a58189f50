use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use validator::Validate;

use super::models::NumpropsConfig;
use crate::constants::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Errors that can occur during configuration parsing
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Other(String),
}

/// Provides the default configuration file path, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads and validates the numprops configuration
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<NumpropsConfig, ConfigError> {
    let mut file = File::open(&config_path).map_err(ConfigError::FileError)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(ConfigError::FileError)?;

    parse_config(&content)
}

/// Parses and validates configuration from YAML text
pub fn parse_config(content: &str) -> Result<NumpropsConfig, ConfigError> {
    let config: NumpropsConfig = serde_yaml::from_str(content).map_err(ConfigError::ParseError)?;

    config.validate().map_err(ConfigError::ValidationError)?;

    let mut seen = HashSet::new();
    for batch in &config.batches {
        if !seen.insert(batch.name.as_str()) {
            return Err(ConfigError::Other(format!(
                "Batch '{}' is defined more than once",
                batch.name
            )));
        }

        if batch.operation.requires_divisor() {
            match batch.divisor {
                None => {
                    return Err(ConfigError::Other(format!(
                        "Batch '{}' uses {} but has no divisor",
                        batch.name, batch.operation
                    )))
                }
                Some(0) => {
                    return Err(ConfigError::Other(format!(
                        "Batch '{}' has a zero divisor",
                        batch.name
                    )))
                }
                Some(_) => {}
            }
        }
    }

    Ok(config)
}
