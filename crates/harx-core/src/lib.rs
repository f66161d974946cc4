pub mod candidates;
pub mod config;
pub mod error;
pub mod har;
pub mod inspect;
pub mod logging;
