//! `harx completions <shell>` – shell completion script.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::{Cli, Outcome};

pub fn run_completions(shell: Shell) -> Result<Outcome> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "harx", &mut io::stdout());
    Ok(Outcome::Success)
}
