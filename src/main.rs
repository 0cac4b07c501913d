use clap::Parser;
use std::process::ExitCode;
use token_minify::utils::logger::{self, LogFormat};
use token_minify::{CliConfig, LocalStorage, MinifyEngine};

fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(LogFormat::from_env());
    tracing::debug!("CLI config: {:?}", config);

    let engine = MinifyEngine::new(LocalStorage::new(), config);

    match engine.run() {
        Ok(report) => {
            for line in report.stdout_lines() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Minification failed: {} (kind: {:?})", e, e.kind());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ Error minifying {}: {}", e.path().display(), e.detail());
            ExitCode::FAILURE
        }
    }
}
