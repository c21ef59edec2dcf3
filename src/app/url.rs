//! URL validation and normalization utilities.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes one entry of the input list.
///
/// Entries without a scheme get `https://`. Entries with a scheme other than
/// `http` or `https`, entries that don't parse, and entries longer than
/// `MAX_URL_LENGTH` (before or after normalization) are logged and skipped.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let preview: String = url.chars().take(50).collect();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            preview
        );
        return None;
    }

    let normalized = match url.split_once("://") {
        Some((scheme, _)) if is_http_scheme(scheme) => url.to_string(),
        Some((scheme, _)) if looks_like_scheme(scheme) => {
            warn!("Skipping unsupported scheme for URL: {url}");
            return None;
        }
        _ => format!("https://{url}"),
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            preview
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(normalized),
        Ok(_) | Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

fn is_http_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

fn looks_like_scheme(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
