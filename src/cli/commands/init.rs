use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::catalog::IssueType;
use crate::core::config::{CONFIG_FILE, DEFAULT_LOG_PATHS};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the config in (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing .builddoctor.yml
    #[arg(long)]
    pub force: bool,
}

pub async fn execute(args: &InitArgs) -> Result<()> {
    let path = args.path.canonicalize()?;
    let config_path = path.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        println!(
            "  {} {} already exists. Use {} to overwrite.",
            "SKIP".yellow(),
            CONFIG_FILE,
            "--force".bold()
        );
        return Ok(());
    }

    std::fs::write(&config_path, generate_config())?;
    println!("  {} {} created", "DONE".green(), CONFIG_FILE);
    println!(
        "  Edit {} to set log locations and ignored issues.",
        config_path.display()
    );

    Ok(())
}

fn generate_config() -> String {
    let log_paths: String = DEFAULT_LOG_PATHS
        .iter()
        .map(|p| format!("  - {}\n", p))
        .collect();
    let known: Vec<&str> = IssueType::ALL.iter().map(|t| t.id()).collect();

    format!(
        r#"# builddoctor configuration

# Candidate build logs, tried in order. Directories are searched for
# the newest *.log file.
log_paths:
{log_paths}
# Issue types never to report ({known})
ignore:
  issues: []
"#,
        known = known.join(", ")
    )
}
