//! `harx candidates <path>` – candidate endpoints as JSON.

use anyhow::Result;
use harx_core::candidates::{extract_candidates, render_candidates, CandidateOptions};
use harx_core::config;
use harx_core::har;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::Outcome;

pub fn run_candidates(path: &Path, config_path: Option<&Path>) -> Result<Outcome> {
    let cfg = config::load(config_path)?;
    let opts = CandidateOptions::from_config(&cfg.candidates)?;

    // Stdout carries only JSON here, so decode errors go to stderr.
    let doc = match har::load(path) {
        Ok(doc) => doc,
        Err(e) if e.is_parse() => {
            eprintln!("Invalid HAR: {e}");
            return Ok(Outcome::ParseFailed);
        }
        Err(e) => return Err(e.into()),
    };

    let candidates = extract_candidates(&doc, &opts);
    tracing::info!("{} candidate(s) in {}", candidates.len(), path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_candidates(&candidates, &mut out)?;
    out.flush()?;
    Ok(Outcome::Success)
}
