//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Markdown document with a title front-matter block.
pub fn qa_document(title: &str, body: &str) -> String {
    format!("---\ntitle: {}\n---\n{}", title, body)
}

/// Create a word for add requests.
pub fn new_word(word: &str) -> Value {
    json!({
        "word": word,
        "literal_translation": format!("literal {}", word),
        "english_translation": format!("english {}", word),
        "usage": format!("Use {} in a sentence.", word),
    })
}

/// Create an add words request body.
pub fn add_words_request(words: &[Value]) -> Value {
    json!(words)
}
