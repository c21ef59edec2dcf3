//! Main application modules.
//!
//! This module provides utilities for URL validation, progress logging,
//! statistics printing, and rendering the result table.

pub mod logging;
pub mod statistics;
pub mod table;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_error_statistics;
pub use table::{render_jsonl, render_table, truncate_url};
pub use url::validate_and_normalize_url;
