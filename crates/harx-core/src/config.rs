use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::candidates::{
    DEFAULT_MAX_BODY_CHARS, DEFAULT_PATTERNS, DEFAULT_REQUEST_HEADERS, DEFAULT_RESPONSE_HEADERS,
};
use crate::inspect::{KeywordFilter, ReportOptions, DEFAULT_KEYWORDS};

/// `[candidates]` section: heuristics for `harx candidates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidatesConfig {
    /// Case-insensitive regexes matched against request URLs.
    pub patterns: Vec<String>,
    /// Request headers kept in the output.
    pub request_headers: Vec<String>,
    /// Response headers kept in the output.
    pub response_headers: Vec<String>,
    /// Characters kept from a non-JSON request body.
    pub max_body_chars: usize,
}

impl Default for CandidatesConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect(),
            request_headers: DEFAULT_REQUEST_HEADERS.iter().map(|s| s.to_string()).collect(),
            response_headers: DEFAULT_RESPONSE_HEADERS.iter().map(|s| s.to_string()).collect(),
            max_body_chars: DEFAULT_MAX_BODY_CHARS,
        }
    }
}

/// Global configuration loaded from `~/.config/harx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarxConfig {
    /// URL substrings that mark a conversation request.
    pub keywords: Vec<String>,
    /// Request headers printed per matching entry.
    pub max_headers: usize,
    /// Characters printed per header value.
    pub max_value_chars: usize,
    pub candidates: CandidatesConfig,
}

impl Default for HarxConfig {
    fn default() -> Self {
        let report = ReportOptions::default();
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            max_headers: report.max_headers,
            max_value_chars: report.max_value_chars,
            candidates: CandidatesConfig::default(),
        }
    }
}

impl HarxConfig {
    pub fn keyword_filter(&self) -> KeywordFilter {
        KeywordFilter::new(&self.keywords)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            max_headers: self.max_headers,
            max_value_chars: self.max_value_chars,
        }
    }
}

/// Existing config file under the XDG config home, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parse a config file; unknown keys are ignored, missing keys take defaults.
pub fn load_from(path: &Path) -> Result<HarxConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HarxConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Load the explicit file if given, else the XDG one, else defaults.
/// Nothing is written to disk.
pub fn load(explicit: Option<&Path>) -> Result<HarxConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(HarxConfig::default()),
    }
}
