//! Front-matter splitting for Q&A documents.
//!
//! # Format
//! ```markdown
//! ---
//! title: Welcome
//! ---
//! # Hi there
//! ```
//!
//! The opening `---` must be the very first thing in the document (after an
//! optional BOM) and may carry a language tag (`---yaml`, `---json`). The
//! block closes at the first `\n---`; one line break after the closing marker
//! is not part of the body. Documents without an opening marker are all body.

use serde_yaml::{Mapping, Value};

use crate::error::FrontMatterError;

const OPEN: &str = "---";
const CLOSE: &str = "\n---";

/// A document split into its metadata and markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    /// Parsed metadata; an empty mapping when the document has none.
    pub data: Value,
    pub body: &'a str,
}

impl<'a> FrontMatter<'a> {
    fn plain(body: &'a str) -> Self {
        Self {
            data: Value::Mapping(Mapping::new()),
            body,
        }
    }

    /// The `title` field as display text.
    ///
    /// Returns `None` for a missing, null, empty, zero or `false` title, and
    /// for sequences and mappings.
    pub fn title(&self) -> Option<String> {
        match self.data.get("title")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()) => {
                Some(n.to_string())
            }
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Split `source` into front-matter metadata and body.
pub fn split(source: &str) -> Result<FrontMatter<'_>, FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(mut rest) = source.strip_prefix(OPEN) else {
        return Ok(FrontMatter::plain(source));
    };
    // `----` is a thematic break, not a delimiter
    if rest.starts_with('-') {
        return Ok(FrontMatter::plain(source));
    }

    let tag_end = line_content_end(rest);
    let language = match rest[..tag_end].trim() {
        "" => Language::Yaml,
        tag => {
            rest = &rest[tag_end..];
            Language::from_tag(tag)?
        }
    };

    let (block, body) = match rest.find(CLOSE) {
        Some(idx) => (&rest[..idx], strip_line_break(&rest[idx + CLOSE.len()..])),
        None => (rest, ""),
    };

    let data = if is_blank(block) {
        Value::Mapping(Mapping::new())
    } else {
        language.parse(block)?
    };

    Ok(FrontMatter { data, body })
}

/// Metadata block languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Yaml,
    Json,
}

impl Language {
    fn from_tag(tag: &str) -> Result<Self, FrontMatterError> {
        match tag {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(FrontMatterError::UnsupportedLanguage(other.to_string())),
        }
    }

    fn parse(self, block: &str) -> Result<Value, FrontMatterError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str(block)?),
            Self::Json => {
                let json: serde_json::Value = serde_json::from_str(block)?;
                Ok(serde_yaml::to_value(json)?)
            }
        }
    }
}

/// Byte offset of the end of the first line, excluding its `\r\n` or `\n`.
fn line_content_end(text: &str) -> usize {
    match text.find('\n') {
        Some(idx) if text[..idx].ends_with('\r') => idx - 1,
        Some(idx) => idx,
        None => text.len(),
    }
}

fn strip_line_break(text: &str) -> &str {
    let text = text.strip_prefix('\r').unwrap_or(text);
    text.strip_prefix('\n').unwrap_or(text)
}

/// A block holding only whitespace and `#` comments carries no metadata.
fn is_blank(block: &str) -> bool {
    block.lines().all(|line| {
        let line = line.trim_start();
        line.is_empty() || line.starts_with('#')
    })
}
