pub mod cli;
pub mod output;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aurebesh_core::{SymbolTable, TrainerSettings};

use crate::cli::Cli;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with(cli)
}

pub fn run_with(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = TrainerSettings::from_env()?;
    tracing::debug!(?settings, "settings loaded");

    let table = SymbolTable::aurebesh();
    let command = cli.command.unwrap_or_default();
    tracing::info!(command = command.name(), "rendering codex");

    let rendered = output::render(&command, &table, &settings)?;
    print!("{rendered}");

    Ok(())
}
