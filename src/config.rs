use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{
    default_languages, default_summarization_models, default_translation_models, Catalog,
    Language, ModelDescriptor, SummaryLengths,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub model_config: ModelConfig,

    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,

    #[serde(default)]
    pub summary_lengths: SummaryLengths,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_debug")]
    pub debug: bool,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_translation_timeout_secs")]
    pub translation_timeout_secs: u64,
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    #[serde(default = "default_min_summary_length")]
    pub min_summary_length: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_debug() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api-inference.huggingface.co/models/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_translation_timeout_secs() -> u64 {
    60
}

fn default_max_text_length() -> usize {
    10_000
}

fn default_min_summary_length() -> usize {
    50
}

impl SystemConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn translation_timeout(&self) -> Duration {
        Duration::from_secs(self.translation_timeout_secs)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
            api_base_url: default_api_base_url(),
            api_token: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            translation_timeout_secs: default_translation_timeout_secs(),
            max_text_length: default_max_text_length(),
            min_summary_length: default_min_summary_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_translation_models")]
    pub translation_models: Vec<ModelDescriptor>,
    #[serde(default = "default_summarization_models")]
    pub summarization_models: Vec<ModelDescriptor>,
    #[serde(default = "default_translation_model")]
    pub default_translation_model: String,
    #[serde(default = "default_summarization_model")]
    pub default_summarization_model: String,
}

fn default_translation_model() -> String {
    "nllb".to_string()
}

fn default_summarization_model() -> String {
    "bart".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            translation_models: default_translation_models(),
            summarization_models: default_summarization_models(),
            default_translation_model: default_translation_model(),
            default_summarization_model: default_summarization_model(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_config: SystemConfig::default(),
            model_config: ModelConfig::default(),
            languages: default_languages(),
            summary_lengths: SummaryLengths::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file, substituting `${VAR}` from the environment
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let content = substitute_vars(&content, |name| std::env::var(name).ok())?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Find the config file, fall back to built-in defaults, then apply environment overrides.
    ///
    /// Returns the path that was loaded, if any.
    pub fn discover() -> Result<(Self, Option<PathBuf>)> {
        let (mut config, loaded) = match std::env::var("CONFIG_PATH") {
            // An explicit path must load
            Ok(path) => (Self::load(&path)?, Some(PathBuf::from(path))),
            Err(_) => {
                let found = ["conf.yaml", "conf.json"]
                    .into_iter()
                    .map(Path::new)
                    .find(|p| p.exists());
                match found {
                    Some(path) => (Self::load(&path.to_string_lossy())?, Some(path.to_path_buf())),
                    None => (Self::default(), None),
                }
            }
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok((config, loaded))
    }

    /// Apply `API_TOKEN`, `API_BASE_URL`, `HOST`, `PORT` and `DEBUG` on top of the loaded values
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let system = &mut self.system_config;
        if let Some(token) = lookup("API_TOKEN") {
            system.api_token = token;
        }
        if let Some(url) = lookup("API_BASE_URL") {
            system.api_base_url = url;
        }
        if let Some(host) = lookup("HOST") {
            system.host = host;
        }
        if let Some(port) = lookup("PORT") {
            system.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(debug) = lookup("DEBUG") {
            system.debug = match debug.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DEBUG",
                        value: debug.clone(),
                    })
                }
            };
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let system = &self.system_config;
        if system.min_summary_length > system.max_text_length {
            return Err(ConfigError::InvalidLimits {
                min: system.min_summary_length,
                max: system.max_text_length,
            });
        }
        Catalog::from_config(self)?;
        Ok(())
    }
}

fn substitute_vars<F>(content: &str, lookup: F) -> Result<String, regex::Error>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}
