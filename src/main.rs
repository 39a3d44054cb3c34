//! Main entry point for Term Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use term_translator::cli::commands::handle_translate;
use term_translator::{Engine, RenderOutcome, TranslateOptions};

/// Look up words and phrases with the Youdao or Baidu translation APIs
#[derive(Parser, Debug)]
#[command(name = "term-translator", version, about, long_about = None)]
struct Args {
    /// Words to translate (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,

    /// 来源语言
    #[arg(short = 's', long = "source-language", default_value = "auto")]
    source_lang: String,

    /// 目标语言
    #[arg(short = 't', long = "target-language", default_value = "auto")]
    target_lang: String,

    /// 翻译引擎
    #[arg(short, long, value_enum, default_value_t = Engine::Youdao)]
    engine: Engine,

    /// Config file (default: /etc/term-translator/config.yaml, then ./config/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for the lookup result
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("term_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = TranslateOptions::new(&args.words, args.engine)
        .with_source_lang(args.source_lang)
        .with_target_lang(args.target_lang);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Every path exits 0, including config failures and provider error codes
    match handle_translate(&options, args.config.as_deref(), &mut out).await {
        Ok(RenderOutcome::Complete) | Ok(RenderOutcome::ProviderError(_)) => {}
        Err(e) => eprintln!("{}", e),
    }

    Ok(())
}
