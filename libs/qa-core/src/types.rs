//! Core types for the Q&A content and the word API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FrontMatterError;
use crate::frontmatter;

/// Title used when a document has no usable `title` field.
pub const UNTITLED: &str = "Untitled";

/// One Q&A entry built from a markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    pub id: String,
    pub title: String,
    /// Markdown body with the front-matter block removed.
    pub content: String,
}

impl QaItem {
    /// Build an item from the full text of a document.
    pub fn from_source(id: impl Into<String>, source: &str) -> Result<Self, FrontMatterError> {
        let matter = frontmatter::split(source)?;
        Ok(Self {
            id: id.into(),
            title: matter.title().unwrap_or_else(|| UNTITLED.to_string()),
            content: matter.body.to_string(),
        })
    }
}

/// Response of a word lookup, kept exactly as the remote API returned it.
///
/// The object is relayed untouched: unknown fields, `null`s and non-string
/// values all survive. Accessors read the well-known string fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordLookupResult(pub Map<String, Value>);

impl WordLookupResult {
    pub fn word(&self) -> Option<&str> {
        self.text("word")
    }

    pub fn literal_translation(&self) -> Option<&str> {
        self.text("literal_translation")
    }

    /// Translation for Chinese lookups.
    pub fn chinese(&self) -> Option<&str> {
        self.text("chinese")
    }

    pub fn english_translation(&self) -> Option<&str> {
        self.text("english_translation")
    }

    pub fn usage(&self) -> Option<&str> {
        self.text("usage")
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}
