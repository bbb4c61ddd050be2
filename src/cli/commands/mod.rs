pub mod analyze;
pub mod fix;
pub mod init;
pub mod report;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::core::config::Config;
use crate::core::diagnosis::{Diagnoser, Diagnosis};
use crate::core::locator::resolve_source;

/// Resolve, read and classify the log for a command. Config and relative
/// candidates are looked up in `base`. `None` when no log was given and
/// none of the configured candidates exist.
pub(crate) async fn diagnose_log(log: Option<&Path>, base: &Path) -> Result<Option<Diagnosis>> {
    let config = Config::load(base);

    let Some(source) = resolve_source(log, base, &config.log_paths()) else {
        println!("  {} No build log found.", "SKIP".yellow());
        tracing::info!(candidates = ?config.log_paths(), "no build log found");
        return Ok(None);
    };

    let diagnoser = Diagnoser::from_config(&config);
    Ok(Some(diagnoser.diagnose(&source).await?))
}
