pub mod formatter;

pub use formatter::{format_report, pull_request_link};
