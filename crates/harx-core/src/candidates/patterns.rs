//! Heuristic URL patterns and header allow-lists.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::config::CandidatesConfig;

pub const DEFAULT_PATTERNS: [&str; 8] = [
    r"backend-api/conversation",
    r"/api/auth/session",
    r"append_message",
    r"chat_conversations/.+/completion",
    r"StreamGenerate",
    r"chat/completions",
    r"generate_chat_title",
    r"models",
];

pub const DEFAULT_REQUEST_HEADERS: [&str; 7] = [
    "content-type",
    "authorization",
    "cookie",
    "x-same-domain",
    "x-client-data",
    "sec-ch-ua",
    "origin",
];

pub const DEFAULT_RESPONSE_HEADERS: [&str; 4] = ["content-type", "set-cookie", "cf-ray", "server"];

pub const DEFAULT_MAX_BODY_CHARS: usize = 4000;

/// Compiled, case-insensitive URL patterns.
#[derive(Debug, Clone)]
pub struct CandidatePatterns {
    patterns: Vec<Regex>,
}

impl CandidatePatterns {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("invalid candidate pattern: {p}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, url: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(url))
    }
}

/// Everything `extract_candidates` needs besides the document.
#[derive(Debug, Clone)]
pub struct CandidateOptions {
    pub patterns: CandidatePatterns,
    /// Lowercase request header names kept in the output.
    pub request_headers: Vec<String>,
    /// Lowercase response header names kept in the output.
    pub response_headers: Vec<String>,
    /// Characters kept from a request body that is not JSON.
    pub max_body_chars: usize,
}

impl CandidateOptions {
    /// Options built from the built-in `[candidates]` defaults.
    pub fn defaults() -> Result<Self> {
        Self::from_config(&CandidatesConfig::default())
    }

    /// Compile options from the `[candidates]` config section.
    pub fn from_config(cfg: &CandidatesConfig) -> Result<Self> {
        Ok(Self {
            patterns: CandidatePatterns::new(&cfg.patterns)?,
            request_headers: cfg.request_headers.iter().map(|h| h.to_lowercase()).collect(),
            response_headers: cfg.response_headers.iter().map(|h| h.to_lowercase()).collect(),
            max_body_chars: cfg.max_body_chars,
        })
    }
}
