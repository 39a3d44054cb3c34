//! Translation service providers

use async_trait::async_trait;

use crate::core::client::HttpTransport;
use crate::core::config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::Engine;
use crate::render::Translation;

pub mod baidu;
pub mod youdao;

pub use baidu::BaiduProvider;
pub use youdao::YoudaoProvider;

/// A remote service that can look up one query
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Sign and send a single request, returning the parsed result
    async fn translate(&self, query: &str, from: &str, to: &str) -> Result<Translation>;

    /// Get provider name for display purposes
    fn name(&self) -> &str;
}

/// Create the provider for `engine`, checking its credentials first
pub fn create_provider(engine: Engine, config: &AppConfig) -> Result<Box<dyn TranslationProvider>> {
    config.validate_for(engine)?;
    let transport = HttpTransport::new(config.timeout())?;

    let provider: Box<dyn TranslationProvider> = match engine {
        Engine::Youdao => {
            let mut provider = YoudaoProvider::new(config.youdao_credentials(), transport);
            if let Some(url) = &config.youdao_api_url {
                provider = provider.with_endpoint(url);
            }
            Box::new(provider)
        }
        Engine::Baidu => {
            let mut provider = BaiduProvider::new(config.baidu_credentials(), transport);
            if let Some(url) = &config.baidu_api_url {
                provider = provider.with_endpoint(url);
            }
            Box::new(provider)
        }
    };

    Ok(provider)
}
