//! Error types for rowcast.
//!
//! List mutations never fail: inserts clamp their position and out-of-range
//! deletes are ignored. Errors only come from the configuration layer.

/// Result type alias for rowcast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of its allowed range.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// The configuration text is not valid TOML or has mistyped keys.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("value_min (5) is greater than value_max (1)");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: value_min (5) is greater than value_max (1)"
        );
    }
}
