//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (body size limit, URL limits, display widths)
//! - CLI option types and parsing
//! - Configuration validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
