//! Application Configuration
//!
//! Constants that shape storage and validation, gathered in one place.

use tracing::Level;

/// Key of the localStorage slot holding the serialized list
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Maximum todo text length, inclusive
pub const DEFAULT_MAX_TEXT_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key
    pub storage_key: String,
    /// Maximum accepted text length in characters
    pub max_text_len: usize,
    /// Most verbose level forwarded to the browser console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            log_level: Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.max_text_len, 500);
        assert_eq!(config.log_level, Level::INFO);
    }
}
