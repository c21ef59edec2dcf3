//! Document retrieval.
//!
//! Fetches each input URL in order and hands the census a `RawDocument` per
//! URL. There is no retry, caching or backpressure: a URL that cannot be
//! fetched becomes an empty document, which counts as zero nodes. The cause
//! is logged and tallied in `ProcessingStats` but never reaches the counter.

mod request;
mod response;

use std::time::Instant;

use log::{debug, warn};

use crate::app::log_progress;
use crate::batch::RawDocument;
use crate::config::LOGGING_INTERVAL;
use crate::error_handling::{
    update_error_stats, ErrorType, InfoType, ProcessingStats, WarningType,
};

use request::RequestHeaders;
use response::{read_body_capped, BodyError};

/// Fetches one URL and returns its body, or empty text on any failure.
///
/// Bodies of non-2xx responses are returned as well; they are still HTML.
pub async fn fetch_document(client: &reqwest::Client, url: &str, stats: &ProcessingStats) -> String {
    let request = RequestHeaders::apply_to_request_builder(client.get(url));
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Failed to fetch {url}: {e}");
            update_error_stats(stats, &e);
            return String::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        debug!("{url} returned {status}, counting its body anyway");
        stats.increment_info(InfoType::NonSuccessStatus);
    }

    match read_body_capped(response).await {
        Ok(body) => {
            debug!("Fetched {} bytes from {url}", body.len());
            body
        }
        Err(BodyError::TooLarge(size)) => {
            warn!("Skipping body of {url}: {size} bytes exceeds limit");
            stats.increment_error(ErrorType::ResponseBodyTooLarge);
            String::new()
        }
        Err(BodyError::Transport(e)) => {
            warn!("Failed to read body of {url}: {e}");
            update_error_stats(stats, &e);
            String::new()
        }
    }
}

/// Fetches every URL sequentially, preserving input order in `RawDocument::index`.
pub async fn fetch_documents(
    client: &reqwest::Client,
    urls: &[String],
    stats: &ProcessingStats,
) -> Vec<RawDocument> {
    let start_time = Instant::now();
    let mut documents = Vec::with_capacity(urls.len());

    for (index, url) in urls.iter().enumerate() {
        let body = fetch_document(client, url, stats).await;
        if body.is_empty() {
            stats.increment_warning(WarningType::EmptyDocument);
        }
        documents.push(RawDocument::new(index, url.clone(), body));

        let fetched = index + 1;
        if fetched % LOGGING_INTERVAL == 0 || fetched == urls.len() {
            log_progress(start_time, fetched, urls.len());
        }
    }

    documents
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
