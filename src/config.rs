//! Advisor configuration.
//!
//! Loaded from a YAML file and/or environment variables. Every field has a
//! default, so an empty file (or none at all) yields a working setup once a
//! Gemini key is available.
//!
//! ```yaml
//! model:
//!   model: gemini-2.0-flash-exp
//!   timeout_secs: 30
//! retry:
//!   max_attempts: 4
//!   base_delay_ms: 1000
//! cache:
//!   ttl:
//!     market_secs: 21600
//! auth:
//!   base_url: https://project.supabase.co
//!   anon_key: public-anon-key
//! ```
//!
//! Environment overrides: `AGRI_MODEL`, `AGRI_HTTP_TIMEOUT_SECS`,
//! `AGRI_RETRY_MAX_ATTEMPTS`, `AGRI_RETRY_BASE_DELAY_MS`, `AGRI_AUTH_URL`,
//! `AGRI_AUTH_ANON_KEY`. The Gemini key itself is resolved when the model is
//! built: `model.api_key`, then the OS keyring, then `GEMINI_API_KEY`.

use crate::advisor::TtlClass;
use crate::model::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::model::GenerationConfig;
use crate::resilience::RetryPolicy;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub model: ModelConfig,
    pub retry: RetryConfig,
    pub cache: CacheSettings,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub base_url: String,
    pub model: String,
    /// Falls back to the OS keyring, then `GEMINI_API_KEY`, when unset.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub text: GenerationConfig,
    pub vision: GenerationConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: 30,
            text: GenerationConfig::text(),
            vision: GenerationConfig::vision(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub jitter_max_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay_ms: 1000,
            jitter_max_ms: 1000,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> Result<RetryPolicy> {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.base_delay_ms),
            Duration::from_millis(self.jitter_max_ms),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl: TtlConfig,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: TtlConfig::default(),
        }
    }
}

/// Time-to-live per operation class, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlConfig {
    pub alerts_secs: u64,
    pub schemes_secs: u64,
    pub market_secs: u64,
    pub analysis_secs: u64,
    pub crop_search_secs: u64,
}

const HOUR: u64 = 60 * 60;

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            alerts_secs: 24 * HOUR,
            schemes_secs: 24 * HOUR,
            market_secs: 6 * HOUR,
            analysis_secs: 6 * HOUR,
            crop_search_secs: 6 * HOUR,
        }
    }
}

impl TtlConfig {
    pub fn ttl(&self, class: TtlClass) -> Duration {
        let secs = match class {
            TtlClass::Alerts => self.alerts_secs,
            TtlClass::Schemes => self.schemes_secs,
            TtlClass::Market => self.market_secs,
            TtlClass::Analysis => self.analysis_secs,
            TtlClass::CropSearch => self.crop_search_secs,
        };
        Duration::from_secs(secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub base_url: Option<String>,
    pub anon_key: Option<String>,
}

impl AdvisorConfig {
    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML file, then overlay environment variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot read config file: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("config_loader"),
            )
        })?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid configuration: {}", e),
                ErrorContext::new().with_source("config_loader"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(model) = get("AGRI_MODEL") {
            self.model.model = model;
        }
        if let Some(secs) = get("AGRI_HTTP_TIMEOUT_SECS") {
            self.model.timeout_secs = parse_number("AGRI_HTTP_TIMEOUT_SECS", &secs)?;
        }
        if let Some(n) = get("AGRI_RETRY_MAX_ATTEMPTS") {
            self.retry.max_attempts = parse_number("AGRI_RETRY_MAX_ATTEMPTS", &n)?;
        }
        if let Some(ms) = get("AGRI_RETRY_BASE_DELAY_MS") {
            self.retry.base_delay_ms = parse_number("AGRI_RETRY_BASE_DELAY_MS", &ms)?;
        }
        if let Some(url) = get("AGRI_AUTH_URL") {
            self.auth.base_url = Some(url);
        }
        if let Some(key) = get("AGRI_AUTH_ANON_KEY") {
            self.auth.anon_key = Some(key);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.retry.max_attempts == 0 {
            return Err(Error::validation_with_context(
                "max_attempts must be at least 1",
                ErrorContext::new()
                    .with_field_path("retry.max_attempts")
                    .with_source("config_loader"),
            ));
        }
        if self.model.timeout_secs == 0 {
            return Err(Error::validation_with_context(
                "timeout must be positive",
                ErrorContext::new()
                    .with_field_path("model.timeout_secs")
                    .with_source("config_loader"),
            ));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        Error::configuration_with_context(
            "Expected a non-negative integer",
            ErrorContext::new()
                .with_field_path(name)
                .with_details(value)
                .with_source("env"),
        )
    })
}
