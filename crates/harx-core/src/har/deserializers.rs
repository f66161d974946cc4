//! Tolerant field decoders for HAR values the report never depends on.
//!
//! Capture tools disagree on nulls and types for optional fields; a mismatch
//! there must not fail the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::parse::HarPostData;

/// String field where null or a non-string value decodes as empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Optional string field where null or a non-string value decodes as `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// `postData` of an unexpected shape decodes as absent.
pub fn lenient_post_data<'de, D>(deserializer: D) -> Result<Option<HarPostData>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(HarPostData::deserialize(value).ok())
}
