//! Configuration for a comparison run.
//!
//! Settings are loaded from config.json at startup and passed explicitly to
//! every stage. The API key is never part of the file; it comes from the
//! environment (optionally via a `.env` file).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound for `max_attempts`, matching the old agent loop's iteration cap.
pub const MAX_ATTEMPTS_CEILING: u32 = 10;

/// Environment variables checked for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["API_KEY", "OPENAI_API_KEY"];

/// One bookmaker taking part in the comparison.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookmakerConfig {
    /// Display name, used in prompts and column headers ("Fortuna")
    pub name: String,
    /// Column prefix in the comparison table; defaults to the first letter of `name`
    #[serde(default)]
    pub short_label: Option<String>,
    /// Homepage screenshot to extract odds from
    pub screenshot: PathBuf,
    /// Where the extracted odds are written
    pub output_csv: PathBuf,
}

impl BookmakerConfig {
    fn new(name: &str, screenshot: &str, output_csv: &str) -> Self {
        Self {
            name: name.to_string(),
            short_label: None,
            screenshot: PathBuf::from(screenshot),
            output_csv: PathBuf::from(output_csv),
        }
    }

    /// Prefix used for this bookmaker's odds columns ("F" in "F: 1").
    pub fn label(&self) -> String {
        match &self.short_label {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => self
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_else(|| "?".to_string()),
        }
    }
}

/// Complete run configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chat model used for every request
    pub model: String,
    /// Sampling temperature used for every request
    pub temperature: f32,
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub api_base_url: String,
    /// HTTP timeout per request; `None` keeps the client default
    pub request_timeout_secs: Option<u64>,
    /// Attempts per request while the model keeps answering with empty text
    pub max_attempts: u32,
    /// Screenshots larger than this (longer side, pixels) are downscaled before upload
    pub max_image_dimension: Option<u32>,
    /// Open every non-empty CSV with the system default application
    pub open_files: bool,
    /// Bookmaker whose match names appear in the comparison
    pub left: BookmakerConfig,
    /// Bookmaker searched for each of the left bookmaker's matches
    pub right: BookmakerConfig,
    /// Combined comparison table
    pub comparison_csv: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.3,
            api_base_url: "https://api.openai.com/v1".to_string(),
            request_timeout_secs: None,
            max_attempts: 1,
            max_image_dimension: None,
            open_files: true,
            left: BookmakerConfig::new("Fortuna", "fortuna_homepage.png", "fortuna_zapasy.csv"),
            right: BookmakerConfig::new("Tipsport", "tipsport_homepage.png", "tipsport_zapasy.csv"),
            comparison_csv: PathBuf::from("kurzy_fortuna_vs_tipsport.csv"),
        }
    }
}

impl AppConfig {
    /// `max_attempts` clamped to `1..=MAX_ATTEMPTS_CEILING`.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.clamp(1, MAX_ATTEMPTS_CEILING)
    }
}

/// Loads configuration from config.json in the base directory, or returns defaults.
pub fn load_config() -> AppConfig {
    load_config_from(&crate::paths::get_config_path())
}

/// Loads configuration from `config_path`, falling back to defaults when the
/// file is missing or invalid.
pub fn load_config_from(config_path: &Path) -> AppConfig {
    crate::log(&format!("Looking for config at: {}", config_path.display()));

    if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log("Config loaded from config.json");
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse config.json: {}. Using defaults.",
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read config.json: {}. Using defaults.",
                    e
                ));
            }
        }
    } else {
        crate::log("config.json not found. Using default config.");
    }

    AppConfig::default()
}

/// Secret used to authenticate against the completion service.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Reads the API key from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        for name in API_KEY_VARS {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                return Ok(Self {
                    api_key: value.trim().to_string(),
                });
            }
        }
        bail!(
            "No API key found. Set {} in the environment or in a .env file",
            API_KEY_VARS.join(" or ")
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[cfg(test)]
    pub fn from_key(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
