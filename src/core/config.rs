//! Configuration management

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{Credentials, Engine};

/// Directories searched for `config.yaml` / `config.yml`, in order
pub const CONFIG_DIRS: &[&str] = &["/etc/term-translator", "./config"];

const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml"];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Youdao application id
    pub youdao_app_key: String,
    /// Youdao application secret
    pub youdao_app_secret: String,
    /// Baidu appid
    pub baidu_app_key: String,
    /// Baidu secret key
    pub baidu_app_secret: String,
    /// Endpoint override, mostly for testing
    pub youdao_api_url: Option<String>,
    /// Endpoint override, mostly for testing
    pub baidu_api_url: Option<String>,
    /// Unset means no request timeout
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    /// Load from the first config file found, then apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => Self::find_config_file(&Self::search_paths())?,
        };

        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Candidate config file paths in search order
    pub fn search_paths() -> Vec<PathBuf> {
        CONFIG_DIRS
            .iter()
            .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| Path::new(dir).join(name)))
            .collect()
    }

    /// First existing file among `candidates`
    pub fn find_config_file(candidates: &[PathBuf]) -> Result<PathBuf> {
        for candidate in candidates {
            debug!("Looking for config at {}", candidate.display());
            if candidate.is_file() {
                return Ok(candidate.clone());
            }
        }

        Err(TranslationError::ConfigNotFound {
            searched: candidates.to_vec(),
        })
    }

    /// Load from YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TranslationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Override credentials from `YOUDAO_APP_KEY`-style variables
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 4] = [
            ("YOUDAO_APP_KEY", &mut self.youdao_app_key),
            ("YOUDAO_APP_SECRET", &mut self.youdao_app_secret),
            ("BAIDU_APP_KEY", &mut self.baidu_app_key),
            ("BAIDU_APP_SECRET", &mut self.baidu_app_secret),
        ];

        for (name, field) in fields {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                debug!("Using {} from environment", name);
                *field = value;
            }
        }
    }

    /// Validate configuration for the chosen engine
    pub fn validate_for(&self, engine: Engine) -> Result<()> {
        let (prefix, creds) = match engine {
            Engine::Youdao => ("youdao", self.youdao_credentials()),
            Engine::Baidu => ("baidu", self.baidu_credentials()),
        };

        if creds.app_key.is_empty() {
            return Err(TranslationError::MissingField {
                field: format!("{}_app_key", prefix),
            });
        }

        if creds.app_secret.is_empty() {
            return Err(TranslationError::MissingField {
                field: format!("{}_app_secret", prefix),
            });
        }

        if self.timeout_ms == Some(0) {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Key pair sent to Youdao
    pub fn youdao_credentials(&self) -> Credentials {
        Credentials::new(&self.youdao_app_key, &self.youdao_app_secret)
    }

    /// Key pair sent to Baidu
    pub fn baidu_credentials(&self) -> Credentials {
        Credentials::new(&self.baidu_app_key, &self.baidu_app_secret)
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
