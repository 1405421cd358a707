pub mod filter;
pub mod window;

pub use filter::{filter_stale, filter_stale_with, FilterMode};
pub use window::{canonical, compute_threshold, is_recent, CANONICAL_FORMAT};
