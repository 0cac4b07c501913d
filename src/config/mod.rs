pub mod cli;

use crate::core::candidates::TOKENS_SEGMENT;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TOKENS_DIR_ENV: &str = "TOKEN_MINIFY_TOKENS_DIR";

/// Where the no-argument mode looks for token files:
/// `TOKEN_MINIFY_TOKENS_DIR` when set, else the nearest `tokens/` directory
/// above the running executable, else `tokens/` in the working directory.
pub fn default_tokens_dir() -> PathBuf {
    match std::env::var_os(TOKENS_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::current_exe()
            .ok()
            .and_then(|exe| tokens_dir_near(&exe))
            .unwrap_or_else(|| PathBuf::from(TOKENS_SEGMENT)),
    }
}

/// Nearest existing `tokens/` directory among the ancestors of the
/// directory holding `exe`. A binary built into `<repo>/target/<profile>/`
/// finds `<repo>/tokens`.
pub fn tokens_dir_near(exe: &Path) -> Option<PathBuf> {
    exe.parent()?
        .ancestors()
        .map(|dir| dir.join(TOKENS_SEGMENT))
        .find(|dir| dir.is_dir())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "token-minify", version)]
#[command(about = "Writes a minified .min.json next to each JSON token file")]
pub struct CliConfig {
    /// JSON files to minify; only files under a `tokens` directory are used.
    /// With no files, every JSON file in the tokens directory is minified.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[arg(skip = default_tokens_dir())]
    pub tokens_dir: PathBuf,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn tokens_dir(&self) -> &Path {
        &self.tokens_dir
    }
}
