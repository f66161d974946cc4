//! Build and order candidate entries.

use serde::Serialize;
use serde_json::Value;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::har::{HarDocument, HarEntry, HarHeader};
use crate::inspect::truncate_chars;

use super::patterns::CandidateOptions;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub method: String,
    pub url: String,
    pub request_headers: BTreeMap<String, String>,
    /// Parsed JSON body, or the raw (truncated) text when it is not JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    /// Omitted when the capture recorded no value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    pub response_headers: BTreeMap<String, String>,
}

impl Candidate {
    fn from_entry(entry: &HarEntry, opts: &CandidateOptions) -> Self {
        let req = &entry.request;
        let res = &entry.response;
        Self {
            method: req.method.clone(),
            url: req.url.clone(),
            request_headers: pick_headers(&req.headers, &opts.request_headers),
            request_body: req
                .post_data
                .as_ref()
                .and_then(|p| p.text.as_deref())
                .filter(|text| !text.is_empty())
                .map(|text| parse_body(text, opts.max_body_chars)),
            status: res.status,
            status_text: res.status_text.clone(),
            response_headers: pick_headers(&res.headers, &opts.response_headers),
        }
    }

    /// Response advertises a streamed body (SSE or raw octets).
    pub fn is_streaming(&self) -> bool {
        self.response_headers
            .get("content-type")
            .map(|ct| {
                let ct = ct.to_ascii_lowercase();
                ct.contains("event-stream") || ct.contains("octet-stream")
            })
            .unwrap_or(false)
    }

    pub fn is_post(&self) -> bool {
        self.method == "POST"
    }
}

/// Lowercase header names (later duplicates win), then keep only `keep`.
fn pick_headers(headers: &[HarHeader], keep: &[String]) -> BTreeMap<String, String> {
    let mut all = BTreeMap::new();
    for h in headers {
        all.insert(h.name.to_lowercase(), h.value.clone());
    }
    all.retain(|name, _| keep.iter().any(|k| k == name));
    all
}

fn parse_body(text: &str, max_chars: usize) -> Value {
    serde_json::from_str(text)
        .unwrap_or_else(|_| Value::String(truncate_chars(text, max_chars).to_string()))
}

/// Matching entries, streaming responses first, then POSTs; capture order
/// is kept within each group.
pub fn extract_candidates(doc: &HarDocument, opts: &CandidateOptions) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = doc
        .entries()
        .iter()
        .filter(|e| opts.patterns.is_match(&e.request.url))
        .map(|e| Candidate::from_entry(e, opts))
        .collect();
    out.sort_by_key(|c| (Reverse(c.is_streaming()), Reverse(c.is_post())));
    tracing::debug!(candidates = out.len(), "extracted candidate endpoints");
    out
}

/// Pretty-printed JSON array followed by a newline.
pub fn render_candidates<W: Write>(candidates: &[Candidate], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, candidates)?;
    writeln!(out)
}
