//! `harx <path>` – conversation-request report.

use anyhow::Result;
use harx_core::config;
use harx_core::har;
use harx_core::inspect::{render_report, KeywordFilter, Report};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::Outcome;

pub fn run_report(path: &Path, keywords: &[String], config_path: Option<&Path>) -> Result<Outcome> {
    let cfg = config::load(config_path)?;
    let filter = if keywords.is_empty() {
        cfg.keyword_filter()
    } else {
        KeywordFilter::new(keywords)
    };
    tracing::debug!(keywords = ?filter.keywords(), "report filter");

    println!("Analyzing: {}", path.display());
    println!();

    let doc = match har::load(path) {
        Ok(doc) => doc,
        Err(e) if e.is_parse() => {
            println!("{e}");
            tracing::warn!(path = %path.display(), "{}", e);
            return Ok(Outcome::ParseFailed);
        }
        Err(e) => return Err(e.into()),
    };

    let report = Report::build(&doc, &filter);
    tracing::info!(
        total = report.total_entries,
        matched = report.requests.len(),
        successful = report.successful().count(),
        "report for {}",
        path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&report, &cfg.report_options(), &mut out)?;
    out.flush()?;
    Ok(Outcome::Success)
}
