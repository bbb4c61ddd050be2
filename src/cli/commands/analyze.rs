use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::output::OutputFormatter;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Build log to analyze ("-" for stdin). Searched for when omitted.
    pub log: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,
}

pub async fn execute(args: &AnalyzeArgs) -> Result<()> {
    run(args, &std::env::current_dir()?).await
}

async fn run(args: &AnalyzeArgs, base: &Path) -> Result<()> {
    let Some(diagnosis) = super::diagnose_log(args.log.as_deref(), base).await? else {
        return Ok(());
    };

    let formatter = OutputFormatter::new(&args.format);
    formatter.display(&diagnosis)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_analyze_explicit_log() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gym.log");
        fs::write(&path, "No profiles for com.app were found").unwrap();
        let args = AnalyzeArgs {
            log: Some(path),
            format: "json".to_string(),
        };
        run(&args, tmp.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_analyze_missing_explicit_log_fails() {
        let tmp = TempDir::new().unwrap();
        let args = AnalyzeArgs {
            log: Some(tmp.path().join("missing.log")),
            format: "table".to_string(),
        };
        assert!(run(&args, tmp.path()).await.is_err());
    }
}
