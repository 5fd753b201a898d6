use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    pub api_ninjas: Option<ProviderConfig>,
    pub quotable: Option<ProviderConfig>,
    pub dummyjson: Option<ProviderConfig>,
    pub zenquotes: Option<ProviderConfig>,
    pub typefit: Option<ProviderConfig>,
    pub frankfurter: Option<ProviderConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RelaysConfig {
    pub allorigins: Option<ProviderConfig>,
    pub jina: Option<ProviderConfig>,
}

/// Default currency pair preselected after the currency list loads.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyDefaults {
    pub from: String,
    pub to: String,
}

impl Default for CurrencyDefaults {
    fn default() -> Self {
        CurrencyDefaults {
            from: "USD".to_string(),
            to: "PHP".to_string(),
        }
    }
}

fn default_require_api() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    12_000
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Optional API Ninjas key; when set, the keyed provider is tried first.
    #[serde(default)]
    pub api_ninjas_key: Option<String>,
    /// Skip direct fetches and go straight to the relay endpoints.
    #[serde(default)]
    pub force_proxy: bool,
    /// When false, chain exhaustion falls back to a built-in quote instead of
    /// an error message.
    #[serde(default = "default_require_api")]
    pub require_api: bool,
    /// Per-attempt network timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub defaults: CurrencyDefaults,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub relays: RelaysConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_ninjas_key: None,
            force_proxy: false,
            require_api: default_require_api(),
            timeout_ms: default_timeout_ms(),
            defaults: CurrencyDefaults::default(),
            providers: ProvidersConfig::default(),
            relays: RelaysConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(AppConfig::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "quotefx", "quotefx")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
