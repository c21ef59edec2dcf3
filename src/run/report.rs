//! Result of a census run.

use serde::Serialize;

use crate::batch::{DocumentOutcome, ResultTable};
use crate::census::DocumentStats;

/// One input URL joined with its census outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusRow {
    /// 1-based position in the (validated) input list.
    pub id: usize,
    pub url: String,
    pub outcome: DocumentOutcome,
}

impl CensusRow {
    pub fn stats(&self) -> Option<&DocumentStats> {
        self.outcome.as_ref().ok()
    }
}

/// Serialized form of a row, used for JSON lines output.
#[derive(Debug, Serialize)]
pub(crate) struct CensusRecord<'a> {
    pub id: usize,
    pub url: &'a str,
    #[serde(flatten)]
    pub stats: Option<DocumentStats>,
    pub error: Option<String>,
}

impl<'a> From<&'a CensusRow> for CensusRecord<'a> {
    fn from(row: &'a CensusRow) -> Self {
        CensusRecord {
            id: row.id,
            url: &row.url,
            stats: row.stats().copied(),
            error: row.outcome.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Results of a census run.
#[derive(Debug, Clone)]
pub struct CensusReport {
    /// One row per input URL, in input order.
    pub rows: Vec<CensusRow>,
    /// Worker count actually used after clamping.
    pub worker_limit: usize,
    /// Wall-clock time from the first fetch to the last count.
    pub elapsed_seconds: f64,
}

impl CensusReport {
    /// Joins the table with the URLs it was built from.
    ///
    /// `urls[i]` must be the URL of the document at index `i`.
    pub fn from_table(
        urls: &[String],
        table: &ResultTable,
        worker_limit: usize,
        elapsed_seconds: f64,
    ) -> Self {
        let rows = table
            .iter()
            .map(|(index, outcome)| CensusRow {
                id: index + 1,
                url: urls.get(index).cloned().unwrap_or_default(),
                outcome: outcome.clone(),
            })
            .collect();
        CensusReport {
            rows,
            worker_limit,
            elapsed_seconds,
        }
    }

    pub fn failed(&self) -> usize {
        self.rows.iter().filter(|row| row.outcome.is_err()).count()
    }
}
