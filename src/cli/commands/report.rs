use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::reporters::json::JsonReporter;
use crate::reporters::markdown::MarkdownReporter;
use crate::reporters::traits::Reporter;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Build log to analyze ("-" for stdin). Searched for when omitted.
    pub log: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "markdown", value_parser = ["markdown", "json"])]
    pub format: String,

    /// Output file path (auto-generated if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn reporter_for(format: &str) -> Box<dyn Reporter> {
    match format {
        "json" => Box::new(JsonReporter),
        _ => Box::new(MarkdownReporter),
    }
}

pub async fn execute(args: &ReportArgs) -> Result<()> {
    run(args, &std::env::current_dir()?).await
}

async fn run(args: &ReportArgs, base: &Path) -> Result<()> {
    let Some(diagnosis) = super::diagnose_log(args.log.as_deref(), base).await? else {
        return Ok(());
    };

    let reporter = reporter_for(&args.format);
    let content = reporter.generate(&diagnosis)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("builddoctor-report.{}", reporter.extension())));

    std::fs::write(&output_path, &content)?;
    println!(
        "  {} {} report written to {}",
        "DONE".green(),
        reporter.name(),
        output_path.display()
    );

    Ok(())
}
