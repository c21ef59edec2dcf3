// Batch runner tests.

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn sample_documents() -> Vec<RawDocument> {
    let bodies = [
        "<div></div>",
        "<div><p>text</p></div>",
        "",
        "<!DOCTYPE html><html></html>",
        "<ul><li>a</li><li>b</li><li><img src=x></li></ul>",
        "<br><br/><hr>",
        "<div><div><span>x</span></div></div>",
        "not html at all",
    ];
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| RawDocument::new(i, format!("https://example.com/{i}"), *body))
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_batch_populates_every_index() {
    let documents = sample_documents();
    let expected = documents.len();
    let table = run_batch(documents, 2).await;

    assert_eq!(table.len(), expected);
    assert!(table.is_complete());
    let indices: Vec<usize> = table.iter().map(|(i, _)| i).collect();
    assert_eq!(indices, (0..expected).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_batch_matches_census_per_document() {
    let documents = sample_documents();
    let table = run_batch(documents.clone(), 4).await;
    for document in &documents {
        let outcome = table.get(document.index).expect("entry missing");
        assert_eq!(outcome, &Ok(census::count_stats(&document.body)));
    }
    assert_eq!(
        table.get(0),
        Some(&Ok(DocumentStats {
            node_count: 1,
            leaf_count: 1,
            div_count: 1
        }))
    );
    assert_eq!(table.get(2), Some(&Ok(DocumentStats::default())));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_run_batch_is_independent_of_worker_count() {
    let documents: Vec<RawDocument> = (0..40)
        .map(|i| {
            let body = "<div><p>x</p><br></div>".repeat(i % 7 + 1);
            RawDocument::new(i, format!("https://example.com/{i}"), body)
        })
        .collect();

    let sequential = run_batch(documents.clone(), 1).await;
    let parallel = run_batch(documents.clone(), 8).await;
    let oversubscribed = run_batch(documents, usize::MAX).await;

    assert_eq!(sequential, parallel);
    assert_eq!(sequential, oversubscribed);
}

#[tokio::test]
async fn test_run_batch_empty_input() {
    let table = run_batch(Vec::new(), 4).await;
    assert!(table.is_empty());
    assert!(table.is_complete());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_batch_isolates_panicking_task() {
    let documents = vec![
        RawDocument::new(0, "a", "<div></div>"),
        RawDocument::new(1, "b", "boom"),
        RawDocument::new(2, "c", "<p></p>"),
    ];
    let stats = Arc::new(ProcessingStats::new());

    let table = run_batch_with(
        documents,
        2,
        |document: &RawDocument| {
            if document.body == "boom" {
                panic!("pathological document");
            }
            census::count_stats(&document.body)
        },
        Some(Arc::clone(&stats)),
    )
    .await;

    assert_eq!(table.len(), 3);
    assert!(table.get(0).is_some_and(|outcome| outcome.is_ok()));
    assert!(table.get(2).is_some_and(|outcome| outcome.is_ok()));
    assert_eq!(
        table.get(1),
        Some(&Err(TaskFailure::Panicked {
            index: 1,
            message: "pathological document".to_string()
        }))
    );
    assert_eq!(table.failures().count(), 1);
    assert_eq!(table.stats().count(), 2);
    assert_eq!(stats.get_error_count(ErrorType::CensusTaskPanicked), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_run_batch_respects_worker_limit() {
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let documents: Vec<RawDocument> = (0..12)
        .map(|i| RawDocument::new(i, format!("u{i}"), "<div></div>"))
        .collect();

    let running_clone = Arc::clone(&running);
    let peak_clone = Arc::clone(&peak);
    let table = run_batch_with(
        documents,
        1,
        move |document: &RawDocument| {
            let now = running_clone.fetch_add(1, Ordering::SeqCst) + 1;
            peak_clone.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(5));
            running_clone.fetch_sub(1, Ordering::SeqCst);
            census::count_stats(&document.body)
        },
        None,
    )
    .await;

    assert_eq!(table.len(), 12);
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_run_batch_records_clamping() {
    let stats = Arc::new(ProcessingStats::new());
    let documents = vec![RawDocument::new(0, "a", "<div></div>")];
    let table = run_batch_with(
        documents,
        available_workers() + 1,
        |document: &RawDocument| census::count_stats(&document.body),
        Some(Arc::clone(&stats)),
    )
    .await;
    assert_eq!(table.len(), 1);
    assert_eq!(stats.get_info_count(InfoType::WorkerLimitClamped), 1);
}

#[test]
fn test_effective_worker_limit_clamps() {
    let ceiling = available_workers();
    assert_eq!(effective_worker_limit(0), 1);
    assert_eq!(effective_worker_limit(1), 1);
    assert_eq!(effective_worker_limit(ceiling), ceiling);
    assert_eq!(effective_worker_limit(ceiling + 100), ceiling);
    assert_eq!(effective_worker_limit(usize::MAX), ceiling);
}

#[test]
fn test_result_table_iterates_in_index_order() {
    let mut table = ResultTable::with_expected(3);
    table.insert(2, Ok(DocumentStats::default()));
    table.insert(0, Ok(DocumentStats::default()));
    assert!(!table.is_complete());
    table.insert(1, Err(TaskFailure::Aborted { index: 1 }));
    assert!(table.is_complete());

    let order: Vec<usize> = (&table).into_iter().map(|(i, _)| i).collect();
    assert_eq!(order, vec![0, 1, 2]);
    let counted: Vec<usize> = table.stats().map(|(i, _)| i).collect();
    assert_eq!(counted, vec![0, 2]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_batch_duplicate_indices_keep_both_documents() {
    let documents = vec![
        RawDocument::new(0, "https://example.com/a", "<div></div>"),
        RawDocument::new(0, "https://example.com/b", "<p><br></p>"),
    ];
    let table = run_batch(documents, 1).await;

    assert_eq!(table.len(), 2);
    assert!(table.is_complete());
    assert_eq!(table.get(0), Some(&Ok(census::count_stats("<div></div>"))));
    assert_eq!(table.get(1), Some(&Ok(census::count_stats("<p><br></p>"))));
}

#[tokio::test]
async fn test_run_batch_keys_by_input_position() {
    let documents = vec![RawDocument::new(5, "https://example.com/5", "<div></div>")];
    let table = run_batch(documents, 1).await;

    let keys: Vec<usize> = table.iter().map(|(i, _)| i).collect();
    assert_eq!(keys, vec![0]);
    assert!(table.is_complete());
    assert!(table.get(5).is_none());
}
