//! Configuration
//!
//! Defaults for persistence and logging, plus the display constants used by
//! the import marker and the text report.

use log::LevelFilter;

/// localStorage key holding the JSON array of lists
pub const STORAGE_KEY: &str = "cookingLists";

/// Appended to the name of every imported list
pub const IMPORT_SUFFIX: &str = " (импорт)";

/// Currency sign printed after every amount in the text report
pub const CURRENCY: &str = "₽";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key under which the list collection is stored
    pub storage_key: String,
    /// Maximum level forwarded to the log backend
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "cookingLists");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_custom_storage_key() {
        let config = Config::default().with_storage_key("test-lists");
        assert_eq!(config.storage_key, "test-lists");
    }
}
