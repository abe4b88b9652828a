use serde::Deserialize;

use crate::models::{PriceRange, PreferencesSeed};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the exported product catalog (JSON array of products)
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Fallback tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Price range preselected when the preference form mounts
    #[serde(default)]
    pub initial_price_range: Option<String>,
}

fn default_data_path() -> String {
    "data/products.json".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Builds the preferences seed described by this configuration.
    ///
    /// An unrecognized `INITIAL_PRICE_RANGE` is ignored with a warning and
    /// the form starts at "Any".
    pub fn preferences_seed(&self) -> PreferencesSeed {
        PreferencesSeed {
            price_range: self
                .initial_price_range
                .as_deref()
                .and_then(PriceRange::parse_or_ignore),
            ..PreferencesSeed::default()
        }
    }
}
