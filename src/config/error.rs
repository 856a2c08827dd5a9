//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let validation_err =
            ConfigError::Validation("route prefix `movie` declared twice".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("validation"));
        assert!(display.contains("movie"));
    }
}
