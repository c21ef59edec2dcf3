//! Tag extraction and classification.
//!
//! Turns scrubbed markup into a flat sequence of tag tokens and rebuilds the
//! canonical, attribute-free stream that leaf detection runs over.

use regex::Regex;
use std::sync::LazyLock;

/// Shape of anything that looks like a tag: `<`, optional `/`, name, attributes, `>`.
///
/// Attributes run lazily up to the first `>`, so a `>` inside a quoted
/// attribute value ends the tag early.
const TAG_PATTERN: &str = r"<(/)?([A-Za-z0-9]*)([^>]*)>";

/// Elements that never carry a body and are always emitted as an open+close pair.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr", "command", "keygen", "menuitem",
];

/// Element whose opening tags are tallied separately.
pub const DIV_ELEMENT: &str = "div";

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(TAG_PATTERN, "TAG_RE"));

/// A classified unit of markup. Names borrow from the scrubbed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagToken<'a> {
    Open(&'a str),
    Close(&'a str),
    /// Doctype, comment, processing instruction or anything else without a name.
    Ignored,
}

impl TagToken<'_> {
    fn write_to(&self, out: &mut String) {
        match self {
            TagToken::Open(name) => {
                out.push('<');
                out.push_str(name);
                out.push('>');
            }
            TagToken::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            TagToken::Ignored => {}
        }
    }
}

/// Returns true for names in [`VOID_ELEMENTS`]. Matching is case-sensitive.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Extracts every tag-shaped substring, in order, stripped down to its name.
pub fn extract_tags(text: &str) -> impl Iterator<Item = TagToken<'_>> {
    TAG_RE.captures_iter(text).map(|caps| {
        let name = caps.get(2).map_or("", |m| m.as_str());
        if name.is_empty() {
            TagToken::Ignored
        } else if caps.get(1).is_some() {
            TagToken::Close(name)
        } else {
            TagToken::Open(name)
        }
    })
}

/// Canonical tag sequence plus the counts gathered while building it.
#[derive(Debug, Default)]
pub struct CanonicalTags<'a> {
    pub tokens: Vec<TagToken<'a>>,
    pub node_count: u64,
    pub div_count: u64,
}

impl CanonicalTags<'_> {
    /// Serializes the retained tokens back to angle-bracket text with no separators.
    pub fn to_stream(&self) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 6);
        for token in &self.tokens {
            token.write_to(&mut out);
        }
        out
    }
}

/// Applies the classification rules to an extracted token sequence.
///
/// - ignored tokens are dropped;
/// - an opening void element becomes `<name></name>` and counts as one node;
/// - a closing void element is dropped, its pair was synthesized by the opener;
/// - any other opening tag counts as a node (and as a div when named `div`);
/// - closing tags are kept but never counted.
pub fn canonicalize<'a>(tokens: impl IntoIterator<Item = TagToken<'a>>) -> CanonicalTags<'a> {
    let mut canonical = CanonicalTags::default();
    for token in tokens {
        match token {
            TagToken::Ignored => {}
            TagToken::Open(name) if is_void_element(name) => {
                canonical.tokens.push(TagToken::Open(name));
                canonical.tokens.push(TagToken::Close(name));
                canonical.node_count += 1;
            }
            TagToken::Close(name) if is_void_element(name) => {}
            TagToken::Open(name) => {
                if name == DIV_ELEMENT {
                    canonical.div_count += 1;
                }
                canonical.tokens.push(token);
                canonical.node_count += 1;
            }
            TagToken::Close(_) => canonical.tokens.push(token),
        }
    }
    canonical
}

/// Counts opening tags immediately followed by their own closing tag.
pub fn count_leaves(tokens: &[TagToken<'_>]) -> u64 {
    tokens
        .windows(2)
        .filter(|pair| matches!(pair, [TagToken::Open(open), TagToken::Close(close)] if open == close))
        .count() as u64
}
