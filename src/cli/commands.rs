//! CLI pipeline: config -> provider -> translate -> render

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::TranslateOptions;
use crate::providers::{create_provider, TranslationProvider};
use crate::render::RenderOutcome;

/// Handle a lookup with config from the standard locations (or `config_path`)
pub async fn handle_translate(
    options: &TranslateOptions,
    config_path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<RenderOutcome> {
    let config = AppConfig::load(config_path)?;
    let provider = create_provider(options.engine, &config)?;
    run_lookup(provider.as_ref(), options, out).await
}

/// Translate with an already constructed provider and print the result
pub async fn run_lookup(
    provider: &dyn TranslationProvider,
    options: &TranslateOptions,
    out: &mut dyn Write,
) -> Result<RenderOutcome> {
    let target_lang = options.effective_target_lang();
    info!(
        "Translating with {}: {} -> {}",
        provider.name(),
        options.source_lang,
        target_lang
    );

    let translation = provider
        .translate(&options.query, &options.source_lang, target_lang)
        .await?;

    let outcome = translation.render(out)?;
    out.flush()?;

    if let RenderOutcome::ProviderError(code) = &outcome {
        info!("{} returned error code {:?}", provider.name(), code);
    }

    Ok(outcome)
}
