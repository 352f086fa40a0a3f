use anyhow::{Context, Result};
use i18n_extractor::{config::Config, pipeline};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log to stderr and to `i18n_extractor.log` inside the output directory.
/// The returned guard keeps the file writer alive until main exits.
fn init_logging(config: &Config) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(&config.output_dir, "i18n_extractor.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18n_extractor=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let sources: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if sources.is_empty() {
        anyhow::bail!("Usage: i18n-extractor <inspection.xml> [more.xml ...]");
    }
    for source in &sources {
        if !source.exists() {
            anyhow::bail!("Report file not found: {}", source.display());
        }
    }

    // The log file lives in the output directory, so that has to exist
    // before the subscriber is installed.
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let _guard = init_logging(&config)?;

    pipeline::run(&config, &sources).await?;
    Ok(())
}
