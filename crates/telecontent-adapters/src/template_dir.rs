//! Discovery of `*.tmpl` message template files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use telecontent_core::{
    application::TEMPLATE_SUFFIX,
    error::{ContentError, ContentResult},
};

/// One template file read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name without the `.tmpl` suffix.
    pub key: String,
    pub path: PathBuf,
    pub source: String,
}

/// Read every `*.tmpl` regular file directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into; other files are ignored.
///
/// # Errors
///
/// [`ContentError::Io`] if `dir` is not a readable directory or a template
/// file cannot be read.
#[instrument(fields(dir = %dir.display()))]
pub fn scan(dir: &Path) -> ContentResult<Vec<TemplateFile>> {
    if !dir.is_dir() {
        return Err(ContentError::Io {
            path: dir.to_path_buf(),
            reason: "not a directory".into(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ContentError::Io {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let key = match entry.file_name().to_string_lossy().strip_suffix(TEMPLATE_SUFFIX) {
            Some(stem) if !stem.is_empty() => stem.to_owned(),
            _ => continue,
        };

        let source = fs::read_to_string(entry.path()).map_err(|e| ContentError::Io {
            path: entry.path().to_path_buf(),
            reason: e.to_string(),
        })?;

        files.push(TemplateFile {
            key,
            path: entry.into_path(),
            source,
        });
    }

    debug!(count = files.len(), "found template files");
    Ok(files)
}
