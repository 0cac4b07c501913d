pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

use std::path::{Path, PathBuf};

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{engine::MinifyEngine, minifier::Minifier};
pub use crate::domain::model::{InvocationMode, MinifyReport};
pub use crate::utils::error::{ErrorKind, MinifyError, Result};

/// Minifies one file on the local filesystem, for callers such as a staging
/// hook that run in-process. Returns the path written, or `None` when `path`
/// is already a `.min.json` file.
pub fn minify_json(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    Minifier::new(LocalStorage::new()).minify(path.as_ref())
}
