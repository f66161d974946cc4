//! CLI for the harx HAR inspector.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_candidates, run_completions, run_report};

const AFTER_HELP: &str = "A HAR file named like a subcommand (e.g. `candidates`) is read as that \
subcommand; pass it as `./candidates` or after `--` to get the report.";

/// Top-level CLI. Without a subcommand, the arguments describe the
/// conversation report.
#[derive(Debug, Parser)]
#[command(name = "harx", version)]
#[command(about = "Inspect HAR captures for conversation API requests", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Path to the HAR file.
    pub path: Option<PathBuf>,

    /// URL keyword to match, case-insensitive. Repeatable; replaces the configured keywords.
    #[arg(long = "keyword", short = 'k', value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Config file (default: $XDG_CONFIG_HOME/harx/config.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List likely chat/auth endpoints with replay headers, as JSON.
    Candidates {
        /// Path to the HAR file.
        path: PathBuf,

        /// Config file (default: $XDG_CONFIG_HOME/harx/config.toml).
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// How a run ended; mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// No HAR path was given; usage was printed.
    Usage,
    /// The HAR file is not valid JSON; the decode error was printed.
    ParseFailed,
}

impl Outcome {
    pub fn code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Usage | Outcome::ParseFailed => 1,
        }
    }
}

pub const USAGE: &str = "Usage: harx <har_file_path>";

pub fn run_from_args() -> Result<Outcome> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Some(CliCommand::Candidates { path, config }) => run_candidates(&path, config.as_deref()),
        Some(CliCommand::Completions { shell }) => run_completions(shell),
        None => match cli.report.path.as_deref() {
            Some(path) => run_report(path, &cli.report.keywords, cli.report.config.as_deref()),
            None => {
                println!("{USAGE}");
                Ok(Outcome::Usage)
            }
        },
    }
}

#[cfg(test)]
mod tests;
