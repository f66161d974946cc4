//! Candidate chat/auth endpoints: URL heuristics plus the headers and body
//! needed to replay a request, emitted as JSON.

mod extract;
mod patterns;

pub use extract::{extract_candidates, render_candidates, Candidate};
pub use patterns::{
    CandidateOptions, CandidatePatterns, DEFAULT_MAX_BODY_CHARS, DEFAULT_PATTERNS,
    DEFAULT_REQUEST_HEADERS, DEFAULT_RESPONSE_HEADERS,
};
