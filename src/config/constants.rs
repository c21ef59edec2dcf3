//! Configuration constants.

/// Default number of census worker threads.
pub const DEFAULT_THREADS: usize = 1;

/// Log a fetch progress line every this many documents.
pub const LOGGING_INTERVAL: usize = 5;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("dom_census/", env!("CARGO_PKG_VERSION"));

/// Maximum response body size in bytes (2MB).
/// Larger bodies are counted as empty documents to bound memory per task.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length accepted from the input list.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Width of the URL column in the result table. Longer URLs are truncated.
pub const URL_DISPLAY_WIDTH: usize = 40;
