//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (FOLIO_*)
//! 2. TOML config file (if FOLIO_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (FOLIO_*)
/// 2. TOML config file (if FOLIO_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the encyclopedia site; article pages live under `{base}/page/`.
    ///
    /// Set via FOLIO_SITE_BASE_URL environment variable.
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,

    /// Domain token identifying same-site links, which are never references.
    ///
    /// Set via FOLIO_SITE_DOMAIN environment variable. Empty disables the filter.
    #[serde(default = "default_site_domain")]
    pub site_domain: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via FOLIO_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum bytes to fetch per request.
    ///
    /// Set via FOLIO_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via FOLIO_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of distinct references kept per article, at most 100.
    ///
    /// Set via FOLIO_MAX_REFERENCES environment variable.
    #[serde(default = "default_max_references")]
    pub max_references: usize,

    /// Structured text shorter than this many characters falls through to the paragraph list.
    ///
    /// Set via FOLIO_STRUCTURED_MIN_CHARS environment variable.
    #[serde(default = "default_structured_min_chars")]
    pub structured_min_chars: usize,

    /// Paragraph-list text shorter than this many characters falls through to container text.
    ///
    /// Set via FOLIO_PARAGRAPH_MIN_CHARS environment variable.
    #[serde(default = "default_paragraph_min_chars")]
    pub paragraph_min_chars: usize,
}

fn default_site_base_url() -> String {
    "https://grokipedia.com".into()
}

fn default_site_domain() -> String {
    "grokipedia.com".into()
}

fn default_user_agent() -> String {
    "folio/0.1".into()
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_max_references() -> usize {
    100
}

fn default_structured_min_chars() -> usize {
    100
}

fn default_paragraph_min_chars() -> usize {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_base_url: default_site_base_url(),
            site_domain: default_site_domain(),
            user_agent: default_user_agent(),
            max_bytes: default_max_bytes(),
            timeout_ms: default_timeout_ms(),
            max_references: default_max_references(),
            structured_min_chars: default_structured_min_chars(),
            paragraph_min_chars: default_paragraph_min_chars(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `FOLIO_`
    /// 2. TOML file from `FOLIO_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("FOLIO_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("FOLIO_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }
}
