//! HAR (HTTP Archive) model and loader.

mod deserializers;
mod load;
mod parse;

pub use load::load;
pub use parse::{
    get_header, HarDocument, HarEntry, HarHeader, HarLog, HarPostData, HarRequest, HarResponse,
};
