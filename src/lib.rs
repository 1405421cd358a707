pub mod config;
pub mod credentials;
pub mod error;
pub mod github;
pub mod notify;
pub mod output;
pub mod runner;
pub mod stale;

pub use error::ReminderError;
