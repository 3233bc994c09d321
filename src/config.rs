use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Settings for the category recommender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommenderConfig {
    pub model: String,
    /// Left unset, the recommender reports itself unavailable
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HubConfig {
    /// Points balance a new session starts with
    pub starting_points: u64,
    /// Base of the chat deep-links booking requests are sent through
    pub messaging_base_url: String,
    /// Keystrokes that unlock the admin console
    pub admin_sequence: String,
    /// How long a notice stays visible
    pub notice_ttl_ms: u64,
    pub recommender: RecommenderConfig,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            starting_points: 250,
            messaging_base_url: "https://wa.me".to_string(),
            admin_sequence: "admin123".to_string(),
            notice_ttl_ms: 4000,
            recommender: RecommenderConfig::default(),
        }
    }
}

impl HubConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file, falling back to defaults when it does not
    /// exist. Environment overrides win over file values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::from_env());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(raw) = std::env::var("SERVICE_HUB_STARTING_POINTS") {
            match raw.trim().parse() {
                Ok(points) => self.starting_points = points,
                Err(_) => warn!("Ignoring invalid SERVICE_HUB_STARTING_POINTS={raw:?}"),
            }
        }
        if let Some(key) = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
        {
            self.recommender.api_key = Some(key);
        }
    }
}
