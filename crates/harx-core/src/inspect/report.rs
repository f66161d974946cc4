//! Console report over the conversation requests of one HAR document.

use std::io::{self, Write};

use crate::har::HarDocument;

use super::filter::{extract_conversation_requests, ConversationRequest, KeywordFilter};

/// Width of the `=` rule printed above each request.
pub const SEPARATOR_WIDTH: usize = 80;

/// Presentation limits; they never alter the stored projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Request headers shown per entry.
    pub max_headers: usize,
    /// Characters of each header value shown.
    pub max_value_chars: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_headers: 10,
            max_value_chars: 100,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub total_entries: usize,
    pub requests: Vec<ConversationRequest>,
}

impl Report {
    pub fn build(doc: &HarDocument, filter: &KeywordFilter) -> Self {
        Self {
            total_entries: doc.entries().len(),
            requests: extract_conversation_requests(doc, filter),
        }
    }

    /// Matches whose status is exactly 200, in capture order.
    pub fn successful(&self) -> impl Iterator<Item = &ConversationRequest> {
        self.requests.iter().filter(|r| r.is_success())
    }
}

/// Longest prefix of `s` with at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn render_report<W: Write>(
    report: &Report,
    opts: &ReportOptions,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Total requests: {}", report.total_entries)?;
    writeln!(out)?;
    writeln!(out, "Conversation-related requests: {}", report.requests.len())?;
    writeln!(out)?;

    let rule = "=".repeat(SEPARATOR_WIDTH);
    for (idx, req) in report.requests.iter().enumerate() {
        writeln!(out, "{rule}")?;
        writeln!(out, "Request #{}", idx + 1)?;
        writeln!(out, "URL: {}", req.url)?;
        writeln!(out, "Method: {}", req.method)?;
        writeln!(out, "Status: {}", req.status)?;
        writeln!(out)?;
        writeln!(out, "Request headers:")?;
        for h in req.headers.iter().take(opts.max_headers) {
            let value = truncate_chars(&h.value, opts.max_value_chars);
            writeln!(out, "  {}: {}", h.name, value)?;
        }
        writeln!(out)?;
    }

    let successful: Vec<&ConversationRequest> = report.successful().collect();
    writeln!(out)?;
    writeln!(out, "Successful requests (200): {}", successful.len())?;

    if !successful.is_empty() {
        writeln!(out)?;
        writeln!(out, "Successful endpoints:")?;
        for req in successful {
            writeln!(out, "  - {} {}", req.method, req.url)?;
        }
    }
    Ok(())
}
