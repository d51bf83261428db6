//! Q&A content access.
//!
//! Content is read from disk on every call; nothing is cached between requests.

use std::path::Path;

use qa_core::{Diagnostic, LoadError, QaItem};

/// Load all Q&A items, logging non-fatal diagnostics.
pub fn load_items(qa_dir: &Path) -> Result<Vec<QaItem>, LoadError> {
    qa_core::load_qa_items(qa_dir, log_diagnostic)
}

/// Load the item with the given id, if any.
pub fn find_item(qa_dir: &Path, id: &str) -> Result<Option<QaItem>, LoadError> {
    Ok(load_items(qa_dir)?.into_iter().find(|item| item.id == id))
}

fn log_diagnostic(diagnostic: Diagnostic) {
    tracing::warn!("{}", diagnostic);
}
