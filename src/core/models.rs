//! Core data models for translation

use clap::ValueEnum;
use std::fmt;

/// Language tag meaning "let the service detect it"
pub const AUTO_LANG: &str = "auto";

/// Target used for Baidu when none is given; it has no `auto` target
pub const BAIDU_DEFAULT_TARGET: &str = "zh";

/// Translation engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Engine {
    /// Youdao open API (SHA-256 v3 signature)
    #[default]
    Youdao,
    /// Baidu fanyi API (MD5 signature)
    Baidu,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Youdao => write!(f, "youdao"),
            Engine::Baidu => write!(f, "baidu"),
        }
    }
}

/// App key / secret pair for one provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Public application id, sent with the request
    pub app_key: String,
    /// Only ever mixed into the signature
    pub app_secret: String,
}

impl Credentials {
    /// Create a key pair
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }
}

/// Parsed command line input for one lookup
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Positional words joined with single spaces
    pub query: String,
    /// `-s`, `auto` by default
    pub source_lang: String,
    /// `-t`, `auto` by default
    pub target_lang: String,
    /// `-e`
    pub engine: Engine,
}

impl TranslateOptions {
    /// Join `words` into one query with both languages set to `auto`
    pub fn new(words: &[String], engine: Engine) -> Self {
        Self {
            query: words.join(" "),
            source_lang: AUTO_LANG.to_string(),
            target_lang: AUTO_LANG.to_string(),
            engine,
        }
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Set the target language
    pub fn with_target_lang(mut self, target_lang: impl Into<String>) -> Self {
        self.target_lang = target_lang.into();
        self
    }

    /// Target language actually sent to the selected engine
    pub fn effective_target_lang(&self) -> &str {
        match self.engine {
            Engine::Baidu if self.target_lang == AUTO_LANG => BAIDU_DEFAULT_TARGET,
            _ => &self.target_lang,
        }
    }
}
