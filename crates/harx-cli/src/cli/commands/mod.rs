//! CLI command handlers, one per file.

mod candidates;
mod completions;
mod report;

pub use candidates::run_candidates;
pub use completions::run_completions;
pub use report::run_report;
