//! Money configuration management.

use serde::Deserialize;
use tracing::debug;

/// Symbol used when none is configured.
pub const DEFAULT_SYMBOL: &str = "$";

/// Options for a configured money constructor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// Display symbol prefixed to formatted amounts.
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

fn default_symbol() -> String {
    DEFAULT_SYMBOL.to_string()
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
        }
    }
}

impl MoneyConfig {
    /// Creates a configuration with the given symbol.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Loads configuration from an optional `config/moneysafe` file and the
    /// environment (`MONEYSAFE_SYMBOL`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/moneysafe").required(false))
            .add_source(config::Environment::with_prefix("MONEYSAFE"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(symbol = %loaded.symbol, "Loaded money configuration");
        Ok(loaded)
    }
}
