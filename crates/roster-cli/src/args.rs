use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DeptCommands, EmpCommands};

/// Command-line interface for the Roster employee records
///
/// Roster keeps departments and employees in a SQLite database. Every command
/// runs a single statement against that database and prints the outcome as
/// markdown, plain text or JSON.
#[derive(Parser)]
#[command(version, about, name = "roster")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roster/roster.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Roster CLI
///
/// - `dept`: Operations on the department table
/// - `emp`: Operations on the employee table
#[derive(Subcommand)]
pub enum Commands {
    /// Manage departments
    #[command(alias = "d")]
    Dept {
        #[command(subcommand)]
        command: DeptCommands,
    },
    /// Manage employees
    #[command(alias = "e")]
    Emp {
        #[command(subcommand)]
        command: EmpCommands,
    },
}
