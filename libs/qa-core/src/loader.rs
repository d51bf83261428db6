//! Content loader for Q&A markdown directories.
//!
//! Every `*.md` entry directly inside the directory becomes one [`QaItem`].
//! Items come back in directory listing order, which is filesystem dependent;
//! sort them if you need a stable order.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, Result};
use crate::types::QaItem;

/// Name of the content directory under the working directory.
pub const QA_DIR_NAME: &str = "qa";

const MARKDOWN_SUFFIX: &str = ".md";

/// Non-fatal events reported while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The content directory does not exist; the load yields no items.
    MissingDirectory { path: PathBuf },
    /// A markdown entry whose name is not valid UTF-8 was skipped.
    SkippedEntry { name: OsString },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectory { path } => write!(
                f,
                "the '{}' directory does not exist at {}; create it and add some markdown files",
                QA_DIR_NAME,
                path.display()
            ),
            Self::SkippedEntry { name } => {
                write!(f, "skipping {}: file name is not valid UTF-8", name.to_string_lossy())
            }
        }
    }
}

/// Default content directory: `qa` under the current working directory.
pub fn default_qa_dir() -> io::Result<PathBuf> {
    Ok(std::env::current_dir()?.join(QA_DIR_NAME))
}

/// Item id for a file name, or `None` if the file is not markdown.
///
/// Only the final `.md` is stripped: `faq.v2.md` becomes `faq.v2`.
pub fn id_from_file_name(name: &str) -> Option<&str> {
    name.strip_suffix(MARKDOWN_SUFFIX)
}

/// Load all Q&A items from `dir`.
///
/// A missing directory is reported to `on_diagnostic` and yields an empty
/// list. Any file that cannot be read or split aborts the whole load.
pub fn load_qa_items<F>(dir: &Path, mut on_diagnostic: F) -> Result<Vec<QaItem>>
where
    F: FnMut(Diagnostic),
{
    if !dir.exists() {
        on_diagnostic(Diagnostic::MissingDirectory {
            path: dir.to_path_buf(),
        });
        return Ok(Vec::new());
    }

    let read_dir_err = |source: io::Error| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let file_name = entry.file_name();

        if !file_name.to_string_lossy().ends_with(MARKDOWN_SUFFIX) {
            continue;
        }
        let Some(id) = file_name.to_str().and_then(id_from_file_name) else {
            on_diagnostic(Diagnostic::SkippedEntry {
                name: file_name.clone(),
            });
            continue;
        };

        let path = entry.path();
        let source = read_source(&path)?;
        let item = QaItem::from_source(id, &source)
            .map_err(|source| LoadError::FrontMatter { path, source })?;
        items.push(item);
    }

    Ok(items)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            LoadError::Encoding {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
