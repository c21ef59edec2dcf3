//! Structural statistics for raw HTML without building a DOM.
//!
//! The pipeline is four text passes over an owned buffer:
//! 1. line endings are removed so the document is one logical line;
//! 2. short relational/assignment expressions next to angle brackets are
//!    scrubbed so inline script such as `a<5` is not read as a tag;
//! 3. tags are extracted, classified and rebuilt as a canonical stream;
//! 4. adjacent `<name></name>` pairs in the canonical stream are counted as leaves.
//!
//! Stage 2 is a heuristic, not a script parser. On adversarial input it can
//! remove too much or too little, which shifts the counts but never fails.
//!
//! Leaves are only detected when the open and close markers are textually
//! adjacent in the canonical stream. Text between them is already gone after
//! stage 3, but any nested element keeps its parent from being a leaf.

mod tags;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub use tags::{
    canonicalize, count_leaves, extract_tags, is_void_element, CanonicalTags, TagToken,
    DIV_ELEMENT, VOID_ELEMENTS,
};

/// Optional run of `=` followed by an angle bracket and a digit, `=` or `+`.
const PSEUDO_EXPRESSION_PATTERN: &str = r"=*[<>][0-9=+]";

static PSEUDO_EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PSEUDO_EXPRESSION_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in PSEUDO_EXPRESSION_RE: {}. This is a programming error.",
            PSEUDO_EXPRESSION_PATTERN, e
        )
    })
});

/// Element counts for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentStats {
    /// Opening tags plus void elements.
    pub node_count: u64,
    /// Elements whose canonical open marker is immediately followed by its close marker.
    pub leaf_count: u64,
    /// Opening `div` tags.
    pub div_count: u64,
}

/// Result of a single pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    pub stats: DocumentStats,
    /// Attribute-free tag stream the leaf count was computed from.
    pub canonical: String,
}

/// Stage 1: drops `\n` and `\r`, leaving all other whitespace as is.
pub fn collapse_line_endings(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Stage 2: removes fragments such as `<5`, `>=` or `=<+`.
pub fn scrub_pseudo_expressions(text: &str) -> String {
    PSEUDO_EXPRESSION_RE.replace_all(text, "").into_owned()
}

/// Runs the full pipeline over one raw document.
///
/// Malformed markup degrades to lower counts; empty input gives zero counts
/// and an empty stream.
pub fn count(raw: &str) -> Census {
    if raw.is_empty() {
        return Census::default();
    }

    let collapsed = collapse_line_endings(raw);
    log::trace!("Stage 1 output: {collapsed}");

    let scrubbed = scrub_pseudo_expressions(&collapsed);
    log::trace!("Stage 2 output: {scrubbed}");

    let canonical = canonicalize(extract_tags(&scrubbed));
    let stream = canonical.to_stream();
    log::trace!("Stage 3 output: {stream}");

    let leaf_count = count_leaves(&canonical.tokens);

    Census {
        stats: DocumentStats {
            node_count: canonical.node_count,
            leaf_count,
            div_count: canonical.div_count,
        },
        canonical: stream,
    }
}

/// Convenience wrapper returning only the counts.
pub fn count_stats(raw: &str) -> DocumentStats {
    count(raw).stats
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
