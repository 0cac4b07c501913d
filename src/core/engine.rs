use crate::core::candidates::select_candidates;
use crate::core::minifier::Minifier;
use crate::core::{ConfigProvider, InvocationMode, MinifyReport, Storage};
use crate::utils::error::Result;

pub struct MinifyEngine<S: Storage, C: ConfigProvider> {
    minifier: Minifier<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MinifyEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            minifier: Minifier::new(storage),
            config,
        }
    }

    /// Minifies every candidate in order. The first failure aborts the run
    /// and is returned; files after it are left untouched.
    pub fn run(&self) -> Result<MinifyReport> {
        let mode = if self.config.files().is_empty() {
            InvocationMode::Scan
        } else {
            InvocationMode::Explicit
        };

        let candidates = select_candidates(self.config.files(), self.config.tokens_dir())?;
        match mode {
            InvocationMode::Scan => {
                tracing::info!("🔍 Found {} JSON files to minify", candidates.len());
            }
            InvocationMode::Explicit if !candidates.is_empty() => {
                tracing::info!(
                    "🔍 Processing {} staged JSON files from tokens folder",
                    candidates.len()
                );
            }
            InvocationMode::Explicit => {}
        }

        let mut produced = Vec::new();
        for candidate in &candidates {
            if let Some(output) = self.minifier.minify(candidate)? {
                produced.push(output);
            }
        }

        Ok(MinifyReport {
            mode,
            candidates: candidates.len(),
            produced,
        })
    }
}
