//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// pgcopy - dependency-ordered PostgreSQL table copy
#[derive(Parser, Debug)]
#[command(name = "pgc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the directory holding pgcopy.yml
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Destination database connection URL
    #[arg(long, global = true, env = "PGCOPY_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Source database connection URL for the copy phase
    #[arg(long, global = true, env = "PGCOPY_SOURCE_URL")]
    pub source_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and print the tables that must be populated before a table
    Plan(PlanArgs),

    /// Generate or apply trigger disable/enable statements
    Triggers(TriggersArgs),

    /// Copy a table and its prerequisites with triggers suspended
    Copy(CopyArgs),
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Table to resolve prerequisites for
    pub table: String,

    /// Show each table's direct foreign-key references
    #[arg(long)]
    pub deps: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: PlanOutput,
}

/// Plan output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutput {
    /// Human-readable list
    Text,
    /// JSON output
    Json,
}

/// Arguments for the triggers command
#[derive(Args, Debug)]
pub struct TriggersArgs {
    /// Transition to apply to every trigger owned by the current user
    #[arg(value_enum)]
    pub action: TriggerTransition,

    /// Print the statements without executing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Trigger transitions selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTransition {
    /// Suspend trigger firing
    Disable,
    /// Restore trigger firing
    Enable,
}

/// Arguments for the copy command
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Table whose prerequisites and data should be copied
    pub table: String,

    /// Print the statements and copy order without executing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
