//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, census tasks)
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Categorization of fetch failures
//!
//! Per-document content never produces an error: malformed or empty markup
//! just yields lower counts. What is tracked here are fetch failures, which
//! degrade to empty documents, and worker tasks that die before returning.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::update_error_stats;
pub use stats::ProcessingStats;
pub use types::{
    ConfigError, ErrorType, InfoType, InitializationError, TaskFailure, WarningType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestConnectError);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestConnectError), 1);

        stats.increment_warning(WarningType::EmptyDocument);
        assert_eq!(stats.get_warning_count(WarningType::EmptyDocument), 1);

        stats.increment_info(InfoType::NonSuccessStatus);
        assert_eq!(stats.get_info_count(InfoType::NonSuccessStatus), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_error(ErrorType::CensusTaskPanicked);
        stats.increment_warning(WarningType::InvalidUrl);
        stats.increment_info(InfoType::WorkerLimitClamped);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }

    #[test]
    fn test_processing_stats_is_shareable_across_threads() {
        let stats = std::sync::Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = std::sync::Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_error(ErrorType::HttpRequestBodyError);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestBodyError), 400);
    }
}
