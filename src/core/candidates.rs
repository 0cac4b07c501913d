use crate::core::minifier::{is_json, is_minified};
use crate::utils::error::{MinifyError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

pub const TOKENS_SEGMENT: &str = "tokens";

/// A JSON file that has not been minified yet.
fn is_source_json(path: &Path) -> bool {
    is_json(path) && !is_minified(path)
}

/// True when a directory component above the file is named `tokens`.
fn in_tokens_dir(path: &Path) -> bool {
    path.parent().is_some_and(|parent| {
        parent
            .components()
            .any(|c| matches!(c, Component::Normal(name) if name == TOKENS_SEGMENT))
    })
}

/// Picks the files to minify.
///
/// With no explicit files the tokens directory is listed (one level deep,
/// sorted by name); a missing directory yields nothing. Explicit files are
/// kept in the given order when they live under a `tokens` directory and
/// are non-minified `.json` files; anything else is dropped.
pub fn select_candidates(files: &[PathBuf], tokens_dir: &Path) -> Result<Vec<PathBuf>> {
    if files.is_empty() {
        return scan_tokens_dir(tokens_dir);
    }

    Ok(files
        .iter()
        .filter(|path| {
            let keep = in_tokens_dir(path) && is_source_json(path);
            if !keep {
                tracing::debug!("Ignoring {}", path.display());
            }
            keep
        })
        .cloned()
        .collect())
}

fn scan_tokens_dir(tokens_dir: &Path) -> Result<Vec<PathBuf>> {
    let scan_error = |source: io::Error| MinifyError::Scan {
        path: tokens_dir.to_path_buf(),
        source,
    };

    match fs::metadata(tokens_dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Tokens directory {} does not exist", tokens_dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(scan_error(e)),
        Ok(meta) if !meta.is_dir() => {
            return Err(scan_error(io::Error::other("not a directory")));
        }
        Ok(_) => {}
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(tokens_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| scan_error(e.into()))?;
        if entry.file_type().is_file() && is_source_json(entry.path()) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
