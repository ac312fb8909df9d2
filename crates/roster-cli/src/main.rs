//! Roster CLI Application
//!
//! Command-line interface for the roster employee records.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, EmpCommands};
use log::info;
use renderer::TerminalRenderer;
use roster_core::RosterBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let roster = RosterBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize roster")?;

    info!("Roster opened at {}", roster.database_path().display());

    let cli = Cli::new(roster, TerminalRenderer::new(!no_color), json);

    match command {
        Some(Dept { command }) => cli.handle_dept_command(command),
        Some(Emp { command }) => cli.handle_emp_command(command),
        None => cli.handle_emp_command(EmpCommands::List),
    }
}
