//! Core Q&A content library used by the backend.
//!
//! Provides:
//! - Content loader that turns a directory of markdown files into Q&A items
//! - Front-matter splitting (`---` delimited YAML block)
//! - Markdown to HTML rendering for the detail view
//! - Shared types (QaItem, WordLookupResult)

pub mod error;
pub mod frontmatter;
pub mod loader;
pub mod render;
pub mod types;

pub use error::{FrontMatterError, LoadError, Result};
pub use frontmatter::{split, FrontMatter};
pub use loader::{default_qa_dir, id_from_file_name, load_qa_items, Diagnostic, QA_DIR_NAME};
pub use render::render_markdown;
pub use types::{QaItem, WordLookupResult, UNTITLED};
