use crate::core::Storage;
use crate::utils::error::{MinifyError, Result};
use std::path::{Path, PathBuf};

pub const JSON_EXTENSION: &str = ".json";
pub const MINIFIED_EXTENSION: &str = ".min.json";

fn name_ends_with(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}

/// True when the file name already carries the `.min.json` suffix.
pub fn is_minified(path: &Path) -> bool {
    name_ends_with(path, MINIFIED_EXTENSION)
}

pub fn is_json(path: &Path) -> bool {
    name_ends_with(path, JSON_EXTENSION)
}

/// `dir/name.json` -> `dir/name.min.json`. A name without a `.json` suffix
/// keeps its full name: `notes.txt` -> `notes.txt.min.json`. Non-UTF-8
/// names are carried over byte for byte.
pub fn minified_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default();
    // For a name ending in `.json`, the file stem is the name minus that suffix.
    let mut output = if is_json(input) {
        input.file_stem().unwrap_or(name).to_os_string()
    } else {
        name.to_os_string()
    };
    output.push(MINIFIED_EXTENSION);
    input.with_file_name(output)
}

/// Parses `content` and re-serializes it without any inserted whitespace.
/// Object keys keep their document order.
pub fn minify_str(content: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    serde_json::to_string(&value)
}

#[derive(Debug, Clone, Default)]
pub struct Minifier<S: Storage> {
    storage: S,
}

impl<S: Storage> Minifier<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the minified sibling of `input` and returns its path, or
    /// `None` when `input` is itself a minified file.
    pub fn minify(&self, input: &Path) -> Result<Option<PathBuf>> {
        if is_minified(input) {
            tracing::info!("⏭️  Skipping already minified file: {}", input.display());
            return Ok(None);
        }

        let content = self
            .storage
            .read_to_string(input)
            .map_err(|source| MinifyError::Read {
                path: input.to_path_buf(),
                source,
            })?;

        let minified = minify_str(&content).map_err(|source| MinifyError::Parse {
            path: input.to_path_buf(),
            source,
        })?;

        let output = minified_path(input);
        self.storage
            .write_file(&output, minified.as_bytes())
            .map_err(|source| MinifyError::Write {
                path: input.to_path_buf(),
                output: output.clone(),
                source,
            })?;

        tracing::debug!("{} bytes -> {} bytes", content.len(), minified.len());
        tracing::info!("✅ Minified: {} → {}", input.display(), output.display());

        Ok(Some(output))
    }
}
