//! Select entries whose URL mentions a conversation keyword.

use crate::har::{HarDocument, HarEntry, HarHeader};

/// Keywords used when neither config nor CLI supplies any.
pub const DEFAULT_KEYWORDS: [&str; 2] = ["conversation", "create"];

/// Only this exact status counts as a successful endpoint.
pub const SUCCESS_STATUS: i32 = 200;

/// Case-insensitive substring filter over request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// Keywords are lowercased; blank ones are dropped so they cannot match every URL.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.keywords.iter().any(|k| url.contains(k.as_str()))
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

/// Projection of a matching entry. Headers are copied in full; display
/// truncation happens only when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRequest {
    pub url: String,
    pub method: String,
    pub status: i32,
    pub headers: Vec<HarHeader>,
    pub response_headers: Vec<HarHeader>,
}

impl ConversationRequest {
    fn from_entry(entry: &HarEntry) -> Self {
        Self {
            url: entry.request.url.clone(),
            method: entry.request.method.clone(),
            status: entry.response.status_code(),
            headers: entry.request.headers.clone(),
            response_headers: entry.response.headers.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Matching entries in capture order, each projected once.
pub fn extract_conversation_requests(
    doc: &HarDocument,
    filter: &KeywordFilter,
) -> Vec<ConversationRequest> {
    doc.entries()
        .iter()
        .filter(|e| filter.matches(&e.request.url))
        .map(ConversationRequest::from_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(urls: &[(&str, i32)]) -> HarDocument {
        let entries: Vec<String> = urls
            .iter()
            .map(|(url, status)| {
                format!(
                    r#"{{"request":{{"method":"GET","url":"{url}","headers":[]}},"response":{{"status":{status},"headers":[]}}}}"#
                )
            })
            .collect();
        format!(r#"{{"log":{{"entries":[{}]}}}}"#, entries.join(","))
            .parse()
            .unwrap()
    }

    #[test]
    fn default_filter_matches_either_keyword_case_insensitively() {
        let f = KeywordFilter::default();
        assert!(f.matches("https://api.x.com/Conversations/123"));
        assert!(f.matches("https://api.x.com/v1/CREATE"));
        assert!(f.matches("https://api.x.com/chat/createConversation"));
        assert!(!f.matches("https://api.x.com/assets/logo.png"));
    }

    #[test]
    fn custom_keywords_replace_defaults() {
        let f = KeywordFilter::new(["  Append_Message ", ""]);
        assert_eq!(f.keywords(), ["append_message".to_string()]);
        assert!(f.matches("https://x/API/append_message"));
        assert!(!f.matches("https://x/conversation"));
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        let f = KeywordFilter::new(Vec::<String>::new());
        assert!(!f.matches("https://x/conversation"));
    }

    #[test]
    fn extraction_preserves_order_and_counts() {
        let d = doc(&[
            ("https://a/create", 201),
            ("https://a/logo.png", 200),
            ("https://a/conversation/1", 200),
            ("https://a/style.css", 404),
            ("https://a/conversation/create", 500),
        ]);
        let reqs = extract_conversation_requests(&d, &KeywordFilter::default());
        let urls: Vec<&str> = reqs.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://a/create",
                "https://a/conversation/1",
                "https://a/conversation/create"
            ]
        );
        let ok: Vec<&str> = reqs
            .iter()
            .filter(|r| r.is_success())
            .map(|r| r.url.as_str())
            .collect();
        assert_eq!(ok, ["https://a/conversation/1"]);
    }

    #[test]
    fn projection_copies_all_headers_untruncated() {
        let long = "v".repeat(250);
        let raw = format!(
            r#"{{"log":{{"entries":[{{
                "request":{{"method":"POST","url":"https://a/conversation","headers":[
                    {{"name":"A","value":"{long}"}},{{"name":"B","value":"b"}}
                ]}},
                "response":{{"status":200,"headers":[{{"name":"Server","value":"x"}}]}}
            }}]}}}}"#
        );
        let d: HarDocument = raw.parse().unwrap();
        let reqs = extract_conversation_requests(&d, &KeywordFilter::default());
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].method, "POST");
        assert_eq!(reqs[0].headers.len(), 2);
        assert_eq!(reqs[0].headers[0].value.len(), 250);
        assert_eq!(reqs[0].response_headers[0].name, "Server");
    }

    #[test]
    fn empty_document_yields_nothing() {
        let d: HarDocument = "{}".parse().unwrap();
        assert!(extract_conversation_requests(&d, &KeywordFilter::default()).is_empty());
    }
}
