//! Conversation-request inspector: keyword filter over request URLs and the
//! console report built from the matches.

mod filter;
mod report;

pub use filter::{
    extract_conversation_requests, ConversationRequest, KeywordFilter, DEFAULT_KEYWORDS,
    SUCCESS_STATUS,
};
pub use report::{render_report, truncate_chars, Report, ReportOptions, SEPARATOR_WIDTH};
