use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// Paths were passed on the command line (e.g. by a pre-commit hook).
    Explicit,
    /// No paths were passed; the tokens directory was scanned.
    Scan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinifyReport {
    pub mode: InvocationMode,
    pub candidates: usize,
    pub produced: Vec<PathBuf>,
}

impl MinifyReport {
    /// Lines the CLI prints on stdout.
    ///
    /// In explicit mode a produced run prints bare paths only, one per line,
    /// so the calling hook can stage them.
    pub fn stdout_lines(&self) -> Vec<String> {
        let paths = self.produced.iter().map(|p| p.display().to_string());

        match self.mode {
            InvocationMode::Explicit => {
                if self.candidates == 0 {
                    vec!["ℹ️  No relevant JSON files to process".to_string()]
                } else {
                    paths.collect()
                }
            }
            InvocationMode::Scan => {
                let mut lines = Vec::new();
                if !self.produced.is_empty() {
                    lines.push("📝 Generated minified files:".to_string());
                    lines.extend(paths);
                }
                lines.push("🎉 JSON minification complete!".to_string());
                lines
            }
        }
    }
}
