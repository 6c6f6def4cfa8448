use anyhow::{ensure, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use png_outline::{CannyOutliner, Config, OutlineParams, OutlineProcessor};

fn main() -> Result<()> {
    let config = Config::new();
    init_logging(config.verbose);

    ensure!(
        config.dir.is_dir(),
        "Directory does not exist: {}",
        config.dir.display()
    );

    let outliner = CannyOutliner::new(OutlineParams::default())?;
    let processor = OutlineProcessor::from_config(outliner, &config);
    let summary = processor
        .process_directory()
        .with_context(|| format!("Failed to scan {}", config.dir.display()))?;

    if !summary.is_clean() {
        tracing::debug!(failed = summary.failed.len(), "batch finished with skipped failures");
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("png_outline={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
