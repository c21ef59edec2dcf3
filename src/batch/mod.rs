//! Parallel census over a batch of fetched documents.
//!
//! Each document is counted on Tokio's blocking pool. A semaphore with one
//! permit per worker bounds how many documents are counted at once. Tasks
//! return their `(index, outcome)` and the coordinating task inserts them into
//! the result table one by one after each join, so no lock guards the table.
//!
//! A panic while counting one document is caught at the join and recorded as
//! a failure entry for that index only.

mod table;

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::Semaphore;
use tokio::task::JoinError;

use crate::census::{self, DocumentStats};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, TaskFailure};

pub use table::{DocumentOutcome, ResultTable};

/// Unmodified response body for one input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// 0-based position in the input list. The batch runner keys results by
    /// the document's position in its input, not by this field.
    pub index: usize,
    pub url: String,
    /// Empty when the fetch failed.
    pub body: String,
}

impl RawDocument {
    pub fn new(index: usize, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Number of hardware execution units, or 1 if it cannot be determined.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Clamps a requested worker count to `1..=available_workers()`.
pub fn effective_worker_limit(requested: usize) -> usize {
    let ceiling = available_workers();
    if requested > ceiling {
        debug!(
            "Requested {} workers but only {} are available; using {}",
            requested, ceiling, ceiling
        );
    }
    requested.clamp(1, ceiling)
}

/// Counts every document with [`census::count`].
pub async fn run_batch(documents: Vec<RawDocument>, worker_limit: usize) -> ResultTable {
    run_batch_with(
        documents,
        worker_limit,
        |document: &RawDocument| census::count_stats(&document.body),
        None,
    )
    .await
}

/// Counts every document with `counter`, at most `worker_limit` at a time.
///
/// The counter sees the whole document so it can log per-URL detail.
///
/// Results are keyed by each document's position in `documents`, not by
/// `RawDocument::index`, so every position gets exactly one entry.
///
/// Resolves once every document has an entry in the table. When `stats` is
/// given, clamping and task failures are tallied there.
pub async fn run_batch_with<F>(
    documents: Vec<RawDocument>,
    worker_limit: usize,
    counter: F,
    stats: Option<Arc<ProcessingStats>>,
) -> ResultTable
where
    F: Fn(&RawDocument) -> DocumentStats + Send + Sync + 'static,
{
    let limit = effective_worker_limit(worker_limit);
    if limit < worker_limit {
        if let Some(stats) = &stats {
            stats.increment_info(InfoType::WorkerLimitClamped);
        }
    }
    debug!(
        "Counting {} documents with {} workers",
        documents.len(),
        limit
    );

    let semaphore = Arc::new(Semaphore::new(limit));
    let counter = Arc::new(counter);
    let mut tasks = FuturesUnordered::new();
    let mut table = ResultTable::with_expected(documents.len());

    for (index, document) in documents.into_iter().enumerate() {
        if document.index != index {
            debug!(
                "Document {} for {} is at input position {}; keying by position",
                document.index, document.url, index
            );
        }
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                // Only happens if the semaphore is closed, which this function never does
                warn!("Worker pool closed, skipping document {index}");
                table.insert(index, Err(TaskFailure::Aborted { index }));
                continue;
            }
        };

        let counter = Arc::clone(&counter);
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            counter(&document)
        });
        tasks.push(async move { (index, handle.await) });
    }

    while let Some((index, joined)) = tasks.next().await {
        let outcome = joined.map_err(|join_error| task_failure(index, join_error));
        if let Err(failure) = &outcome {
            warn!("{failure}");
            if let Some(stats) = &stats {
                stats.increment_error(match failure {
                    TaskFailure::Panicked { .. } => ErrorType::CensusTaskPanicked,
                    TaskFailure::Aborted { .. } => ErrorType::CensusTaskAborted,
                });
            }
        }
        table.insert(index, outcome);
    }

    table
}

fn task_failure(index: usize, join_error: JoinError) -> TaskFailure {
    if !join_error.is_panic() {
        return TaskFailure::Aborted { index };
    }
    let payload = join_error.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    TaskFailure::Panicked { index, message }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
