//! Fallback policy for the per-repository lookups.
//!
//! Contributor and README fetches never fail a search. Every error is
//! logged at debug level and replaced by a fixed value here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::SearchError;
use crate::models::{Contributor, ReadmeContent};

pub const MAX_CONTRIBUTORS: usize = 3;
pub const README_EXCERPT_CHARS: usize = 300;
pub const README_UNAVAILABLE: &str = "README not available.";
const ELLIPSIS: &str = "...";

/// First [`MAX_CONTRIBUTORS`] logins, or nothing if the lookup failed.
pub fn contributors_or_fallback(
    repo: &str,
    lookup: Result<Vec<Contributor>, SearchError>,
) -> Vec<String> {
    match lookup {
        Ok(contributors) => contributors
            .into_iter()
            .take(MAX_CONTRIBUTORS)
            .map(|c| c.login)
            .collect(),
        Err(e) => {
            debug!("Contributors unavailable for '{}': {}", repo, e);
            Vec::new()
        }
    }
}

/// README excerpt, or [`README_UNAVAILABLE`] if the lookup or base64
/// decoding failed.
pub fn readme_or_fallback(repo: &str, lookup: Result<ReadmeContent, SearchError>) -> String {
    let readme = match lookup {
        Ok(readme) => readme,
        Err(e) => {
            debug!("README unavailable for '{}': {}", repo, e);
            return README_UNAVAILABLE.to_string();
        }
    };

    match decode_content(repo, &readme.content) {
        Some(text) => excerpt(&text),
        None => README_UNAVAILABLE.to_string(),
    }
}

/// Decode a base64 content payload. Line breaks in the payload are skipped
/// and invalid UTF-8 sequences are dropped.
pub fn decode_content(repo: &str, content: &str) -> Option<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("README for '{}' is not valid base64: {}", repo, e);
            return None;
        }
    };

    let mut text = String::with_capacity(bytes.len());
    let mut dropped = false;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped |= !chunk.invalid().is_empty();
    }
    if dropped {
        debug!("Dropped undecodable bytes from README of '{}'", repo);
    }
    Some(text)
}

/// Truncate to [`README_EXCERPT_CHARS`] characters, marking the cut.
pub fn excerpt(text: &str) -> String {
    match text.char_indices().nth(README_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
