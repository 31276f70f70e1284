//! Drillbook CLI Application
//!
//! Command-line interface for authoring weekly training programs.

mod args;
mod cli;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use drillbook_core::LibraryBuilder;
use handler::{print_schema, Handler};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = args.editor_options();

    if let Some(Schema) = args.command {
        return print_schema();
    }

    let library = LibraryBuilder::new()
        .with_database_path(args.database_file)
        .build()
        .await
        .context("Failed to initialize library")?;

    let renderer = TerminalRenderer::new(!args.no_color);

    info!(
        "Drillbook started (numbering: {}, superset policy: {:?})",
        options.numbering.as_str(),
        options.superset_policy
    );

    let handler = Handler::new(library, renderer, options);
    match args.command {
        Some(Draft { command }) => handler.handle_draft_command(command).await,
        Some(Week { command }) => handler.handle_week_command(command).await,
        Some(Item { command }) => handler.handle_item_command(command).await,
        Some(Superset { command }) => handler.handle_superset_command(command).await,
        Some(Program { command }) => handler.handle_program_command(command).await,
        Some(Routine { command }) => handler.handle_routine_command(command).await,
        Some(Video { command }) => handler.handle_video_command(command).await,
        Some(Focus { command }) => handler.handle_focus_command(command).await,
        Some(Schema) => print_schema(),
        None => handler.list_programs().await,
    }
}
