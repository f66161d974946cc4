//! HAR 1.2 structures, reduced to the fields the inspector reads.
//!
//! Every nested level is defaultable: a capture without `log` or
//! `log.entries` parses to an empty document instead of failing.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::HarError;

use super::deserializers::{lenient_opt_string, lenient_post_data, lenient_string};

/// Root HAR document (top-level wrapper).
#[derive(Debug, Default, Deserialize)]
pub struct HarDocument {
    #[serde(default)]
    pub log: Option<HarLog>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarEntry {
    #[serde(default)]
    pub request: HarRequest,
    #[serde(default)]
    pub response: HarResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarRequest {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default, rename = "postData", deserialize_with = "lenient_post_data")]
    pub post_data: Option<HarPostData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarResponse {
    /// Browsers record 0 (and some tools -1) for aborted requests.
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default, rename = "statusText", deserialize_with = "lenient_opt_string")]
    pub status_text: Option<String>,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HarHeader {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarPostData {
    #[serde(default, rename = "mimeType", deserialize_with = "lenient_opt_string")]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub text: Option<String>,
}

impl HarResponse {
    /// Status as the report compares it; 0 when the capture has none.
    pub fn status_code(&self) -> i32 {
        self.status.unwrap_or(0)
    }
}

impl HarDocument {
    /// Entries in capture order; empty when `log` is absent.
    pub fn entries(&self) -> &[HarEntry] {
        match &self.log {
            Some(log) => &log.entries,
            None => &[],
        }
    }
}

impl FromStr for HarDocument {
    type Err = HarError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(raw).map_err(|source| HarError::Parse { path: None, source })
    }
}

/// First header matching `name` (ASCII case-insensitive).
pub fn get_header<'a>(headers: &'a [HarHeader], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}
