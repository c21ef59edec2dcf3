//! Progress logging utilities.

use log::info;

/// Logs how many documents have been fetched so far and the fetch rate.
pub fn log_progress(start_time: std::time::Instant, fetched: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        fetched as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Fetched {}/{} documents in {:.2} seconds (~{:.2} docs/sec)",
        fetched, total, elapsed_secs, rate
    );
}
