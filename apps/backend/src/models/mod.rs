//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from qa-core
pub use qa_core::{QaItem, WordLookupResult};

/// GET /api/qa response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaListResponse {
    pub items: Vec<QaItem>,
}

/// GET /api/qa/{id} response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaDetailResponse {
    pub id: String,
    pub title: String,
    /// Markdown source
    pub content: String,
    /// `content` rendered to HTML
    pub html: String,
}

impl QaDetailResponse {
    pub fn from_item(item: QaItem) -> Self {
        let html = qa_core::render_markdown(&item.content);
        Self {
            id: item.id,
            title: item.title,
            content: item.content,
            html,
        }
    }
}

/// Query string of GET /api/words
#[derive(Debug, Clone, Deserialize)]
pub struct WordQuery {
    #[serde(default)]
    pub word: String,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
