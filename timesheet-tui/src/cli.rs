use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "timesheet-tui")]
#[command(about = "Interactive timesheet table in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a JSON file of activity records
    View {
        /// Path to a JSON array of activities
        file: PathBuf,
    },
    /// Render the built-in demo data set
    Demo,
    /// Print config path and create default file if missing
    ConfigPath,
}
