//! CLI parse tests.

use super::*;
use clap::CommandFactory;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_report_path() {
    let cli = parse(&["harx", "capture.har"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.report.path.as_deref(), Some(Path::new("capture.har")));
    assert!(cli.report.keywords.is_empty());
    assert!(cli.report.config.is_none());
}

#[test]
fn cli_parse_no_args_has_no_path() {
    let cli = parse(&["harx"]);
    assert!(cli.command.is_none());
    assert!(cli.report.path.is_none());
}

#[test]
fn cli_parse_keywords_and_config() {
    let cli = parse(&[
        "harx",
        "--keyword",
        "completion",
        "-k",
        "stream",
        "--config",
        "/tmp/harx.toml",
        "x.har",
    ]);
    assert_eq!(cli.report.keywords, ["completion", "stream"]);
    assert_eq!(cli.report.config.as_deref(), Some(Path::new("/tmp/harx.toml")));
    assert_eq!(cli.report.path.as_deref(), Some(Path::new("x.har")));
}

#[test]
fn cli_parse_candidates() {
    match parse(&["harx", "candidates", "/path/to/file.har"]).command {
        Some(CliCommand::Candidates { path, config }) => {
            assert_eq!(path, Path::new("/path/to/file.har"));
            assert!(config.is_none());
        }
        other => panic!("expected Candidates, got {other:?}"),
    }
}

#[test]
fn cli_parse_candidates_requires_path() {
    assert!(Cli::try_parse_from(["harx", "candidates"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["harx", "completions", "bash"]).command {
        Some(CliCommand::Completions { shell }) => assert_eq!(shell, clap_complete::Shell::Bash),
        other => panic!("expected Completions, got {other:?}"),
    }
}

#[test]
fn cli_report_args_conflict_with_subcommand() {
    assert!(Cli::try_parse_from(["harx", "-k", "x", "candidates", "a.har"]).is_err());
}

#[test]
fn outcome_exit_codes() {
    assert_eq!(Outcome::Success.code(), 0);
    assert_eq!(Outcome::Usage.code(), 1);
    assert_eq!(Outcome::ParseFailed.code(), 1);
}

#[test]
fn run_without_path_is_usage() {
    let outcome = run(parse(&["harx"])).unwrap();
    assert_eq!(outcome, Outcome::Usage);
}

#[test]
fn cli_parse_subcommand_named_file_after_double_dash() {
    let cli = parse(&["harx", "--", "candidates"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.report.path.as_deref(), Some(Path::new("candidates")));
}

#[test]
fn cli_parse_subcommand_named_file_with_relative_prefix() {
    let cli = parse(&["harx", "./completions"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.report.path.as_deref(), Some(Path::new("./completions")));
}

#[test]
fn help_explains_subcommand_named_files() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("./candidates"), "{help}");
    assert!(help.contains("after `--`"), "{help}");
}
