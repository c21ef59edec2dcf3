//! End-to-end census run: read URLs, fetch, count, report.

mod report;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::app::{print_error_statistics, validate_and_normalize_url};
use crate::batch::{effective_worker_limit, run_batch_with, RawDocument};
use crate::census;
use crate::config::Config;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::fetch::fetch_documents;
use crate::initialization::init_client;

pub use report::{CensusReport, CensusRow};
pub(crate) use report::CensusRecord;

/// Reads the URL list, skipping blank lines, `#` comments and invalid URLs.
pub async fn read_urls<R>(reader: R, stats: &ProcessingStats) -> Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut urls = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read URL list")? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match validate_and_normalize_url(trimmed) {
            Some(url) => urls.push(url),
            None => stats.increment_warning(WarningType::InvalidUrl),
        }
    }
    Ok(urls)
}

/// Runs a census with the provided configuration.
///
/// Reads URLs from `config.file` (or stdin for `-`), fetches each document in
/// order, counts them on `config.threads` workers and returns one row per URL.
///
/// # Errors
///
/// Fails if the configuration is invalid, the input cannot be read, or the
/// HTTP client cannot be built. Individual fetch or count failures never fail
/// the run; they show up as empty documents or error rows.
pub async fn run_census(config: Config) -> Result<CensusReport> {
    config.validate().context("Invalid configuration")?;

    let stats = Arc::new(ProcessingStats::new());
    let urls = if config.file.as_os_str() == "-" {
        info!("Reading URLs from stdin");
        read_urls(BufReader::new(tokio::io::stdin()), &stats).await?
    } else {
        let file = tokio::fs::File::open(&config.file)
            .await
            .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
        read_urls(BufReader::new(file), &stats).await?
    };
    info!("Total URLs: {}", urls.len());

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let worker_limit = effective_worker_limit(config.threads);
    if worker_limit < config.threads {
        info!(
            "Cannot count with more threads than available on this system; limiting to {}",
            worker_limit
        );
    }

    let start_time = std::time::Instant::now();
    let documents = fetch_documents(&client, &urls, &stats).await;

    let show_canonical = config.show_canonical;
    let table = run_batch_with(
        documents,
        config.threads,
        move |document: &RawDocument| {
            let result = census::count(&document.body);
            if show_canonical {
                info!("Canonical stream for {}: {}", document.url, result.canonical);
            }
            result.stats
        },
        Some(Arc::clone(&stats)),
    )
    .await;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    print_error_statistics(&stats);

    Ok(CensusReport::from_table(
        &urls,
        &table,
        worker_limit,
        elapsed_seconds,
    ))
}
