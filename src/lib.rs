//! Term Translator - command-line dictionary client for the Youdao and Baidu
//! translation APIs
//!
//! A lookup is one pass: load credentials, sign the query, POST one form
//! request, decode the JSON body and print it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod providers;
pub mod render;

// Re-export key types for convenience
pub use self::core::{
    client::HttpTransport,
    config::AppConfig,
    errors::{Result, TranslationError},
    models::{Credentials, Engine, TranslateOptions},
};

pub use providers::{create_provider, TranslationProvider};
pub use render::{RenderOutcome, Translation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
