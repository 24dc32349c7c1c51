mod api;
mod forms;
mod tui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use clap::Parser;
use once_cell::sync::OnceCell;

use crate::tui::apps::FormPage;
use crate::tui::{RuntimeConfig, ThemeVariant};

static RUNTIME_CONFIG: OnceCell<ArcSwap<RuntimeConfig>> = OnceCell::new();

/// Lock-free read of the process-wide config. Falls back to defaults
/// when main has not installed one (unit tests).
pub fn global_runtime_config() -> arc_swap::Guard<Arc<RuntimeConfig>> {
    RUNTIME_CONFIG
        .get_or_init(|| ArcSwap::from_pointee(RuntimeConfig::default()))
        .load()
}

#[derive(Parser)]
#[command(name = "formdeck", version, about = "Schema-driven forms in the terminal")]
struct Cli {
    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeVariant::Mocha)]
    theme: ThemeVariant,

    /// Write logs to this file (stdout belongs to the TUI)
    #[arg(long, default_value = "formdeck.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = RuntimeConfig {
        theme_variant: cli.theme,
    };
    RUNTIME_CONFIG
        .set(ArcSwap::from_pointee(config))
        .map_err(|_| anyhow::anyhow!("runtime config initialized twice"))?;

    log::info!("starting formdeck");
    tui::run::<FormPage>().await
}
