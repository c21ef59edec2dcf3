//! Result rendering: fixed-width table or JSON lines.

use std::fmt::Write;

use crate::config::URL_DISPLAY_WIDTH;
use crate::run::{CensusRecord, CensusRow};

/// Shortens a URL to at most `URL_DISPLAY_WIDTH` characters.
pub fn truncate_url(url: &str) -> &str {
    match url.char_indices().nth(URL_DISPLAY_WIDTH) {
        Some((cut, _)) => &url[..cut],
        None => url,
    }
}

/// Renders `ID  URL  # Nodes  # Leaf Nodes  # Div Nodes`, one row per document.
///
/// Rows whose census task failed show `error` in the count columns.
pub fn render_table(rows: &[CensusRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}\t{:>width$}\t{:>15}\t{:>15}\t{:>15}",
        "ID",
        "URL",
        "# Nodes",
        "# Leaf Nodes",
        "# Div Nodes",
        width = URL_DISPLAY_WIDTH
    );
    for row in rows {
        let url = truncate_url(&row.url);
        let _ = match row.stats() {
            Some(stats) => writeln!(
                out,
                "{:>5}\t{:>width$}\t{:>15}\t{:>15}\t{:>15}",
                row.id,
                url,
                stats.node_count,
                stats.leaf_count,
                stats.div_count,
                width = URL_DISPLAY_WIDTH
            ),
            None => writeln!(
                out,
                "{:>5}\t{:>width$}\t{:>15}\t{:>15}\t{:>15}",
                row.id,
                url,
                "error",
                "error",
                "error",
                width = URL_DISPLAY_WIDTH
            ),
        };
    }
    out
}

/// Renders one JSON object per row.
pub fn render_jsonl(rows: &[CensusRow]) -> serde_json::Result<String> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(&CensusRecord::from(row))?);
        out.push('\n');
    }
    Ok(out)
}
