//! Case-insensitive document search.

use crate::ingest::Document;

/// Returns the index of the first line containing `query`, ignoring case.
pub fn find(document: &Document, query: &str) -> Option<usize> {
    let needle = query.to_lowercase();
    document
        .lines()
        .iter()
        .position(|line| line.to_lowercase().contains(&needle))
}

/// Scroll offset that puts `match_index` at the top of the page without
/// scrolling past the end of the document.
pub fn scroll_target(match_index: usize, document_len: usize, page_size: usize) -> usize {
    match_index.min(document_len.saturating_sub(page_size))
}
