//! Tracker Configuration

use serde::{Deserialize, Serialize};

/// Storage keys and display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Key holding the serialized task list
    pub tasks_key: String,
    /// Key holding the serialized order list
    pub orders_key: String,
    /// Prefix for money labels; also stripped from inline price edits
    pub currency_symbol: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tasks_key: "tasks".to_string(),
            orders_key: "orders".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.tasks_key, "tasks");
        assert_eq!(config.orders_key, "orders");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_partial_json() {
        let config = TrackerConfig::from_json(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.tasks_key, "tasks");
    }
}
