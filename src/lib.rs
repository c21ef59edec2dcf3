//! dom_census library: element census over the HTML behind a list of URLs
//!
//! For every document this library reports three numbers: how many elements it
//! opens, how many of those are leaves (no element nested inside), and how many
//! are `div`s. Counting is a text pipeline over the raw markup; no DOM is built.
//! Documents are fetched in input order and counted on a bounded worker pool.
//!
//! # Example
//!
//! ```no_run
//! use dom_census::{run_census, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     threads: 4,
//!     ..Default::default()
//! };
//!
//! let report = run_census(config).await?;
//! for row in &report.rows {
//!     if let Some(stats) = row.stats() {
//!         println!("{} {} {}", row.url, stats.node_count, stats.leaf_count);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Counting a single document needs no runtime:
//!
//! ```
//! let stats = dom_census::count_stats("<div><p>hi</p><br></div>");
//! assert_eq!(stats.node_count, 3);
//! assert_eq!(stats.leaf_count, 2);
//! assert_eq!(stats.div_count, 1);
//! ```
//!
//! # Requirements
//!
//! [`run_census`] and the batch runner require a Tokio runtime.

mod app;
pub mod batch;
pub mod census;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod run;

// Re-export public API
pub use app::{render_jsonl, render_table, truncate_url};
pub use batch::{run_batch, run_batch_with, DocumentOutcome, RawDocument, ResultTable};
pub use census::{count, count_stats, Census, DocumentStats};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{ConfigError, InitializationError, ProcessingStats, TaskFailure};
pub use run::{read_urls, run_census, CensusReport, CensusRow};
