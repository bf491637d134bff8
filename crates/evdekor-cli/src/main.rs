//! Evdekor CLI Application
//!
//! Command-line front end for the reservation wizard.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use evdekor_core::WizardBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        draft_file,
        endpoint,
        no_color,
        command,
    } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_draft_path(draft_file)
        .with_endpoint(endpoint)
        .build()
        .context("Failed to initialize reservation wizard")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(wizard, renderer);

    info!("Evdekor started");

    match command.unwrap_or(Show) {
        Show => cli.show(),
        Set(args) => cli.set(&args.into()),
        Validate => cli.validate(),
        Catalog => cli.catalog(),
        Submit(args) => cli.submit(&args.into()).await,
        Clear => cli.clear(),
        Interactive => cli.interactive().await,
    }
}
