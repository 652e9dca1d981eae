//! # Configuration
//!
//! Wares configuration is managed by [`confique`], loading from TOML files
//! and environment variables layered over compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_file` | — | Path of the JSON seed loaded at startup |
//! | `currency` | `"USD"` | Currency code used when rendering prices |

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for wares, stored in `wares.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WaresConfig {
    /// Path to the JSON seed file loaded at startup. When absent, the
    /// session starts with an empty collection.
    #[config(env = "WARES_SEED_FILE")]
    pub seed_file: Option<String>,

    /// Currency code shown next to prices by the presentation layer.
    #[config(default = "USD", env = "WARES_CURRENCY")]
    pub currency: String,
}

impl Default for WaresConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            currency: "USD".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = WaresConfig::default();
        assert_eq!(config.seed_file, None);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "seed_file = \"products.json\"").unwrap();
        writeln!(file, "currency = \"EUR\"").unwrap();

        let config = WaresConfig::builder().file(file.path()).load().unwrap();

        assert_eq!(config.seed_file.as_deref(), Some("products.json"));
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = WaresConfig::builder()
            .file("/no/such/wares.toml")
            .load()
            .unwrap();

        assert_eq!(config, WaresConfig::default());
    }
}
