use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::catalog::IssueType;
use crate::core::classifier::DetectedIssue;
use crate::fixers::generate_fix_commands;
use crate::fixers::runner::{run_commands, CommandOutcome, ShellRunner};

#[derive(Args, Debug)]
pub struct FixArgs {
    /// Build log to analyze ("-" for stdin). Searched for when omitted.
    pub log: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Only fix these issue types (comma-separated, e.g. gem_dependencies,code_signing)
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,
}

fn parse_only(ids: &[String]) -> Result<Vec<IssueType>> {
    ids.iter()
        .map(|id| match IssueType::from_id(id) {
            Some(t) => Ok(t),
            None => bail!("unknown issue type '{}'", id),
        })
        .collect()
}

fn select_issues(issues: &[DetectedIssue], only: &[IssueType]) -> Vec<DetectedIssue> {
    issues
        .iter()
        .filter(|i| only.is_empty() || only.contains(&i.issue_type))
        .cloned()
        .collect()
}

/// Count (succeeded, failed) outcomes. Dry-run entries count as neither.
fn tally(results: &[(String, CommandOutcome)]) -> (usize, usize) {
    let succeeded = results
        .iter()
        .filter(|(_, o)| *o == CommandOutcome::Succeeded)
        .count();
    let failed = results.iter().filter(|(_, o)| o.is_failure()).count();
    (succeeded, failed)
}

pub async fn execute(args: &FixArgs) -> Result<()> {
    run(args, &std::env::current_dir()?).await
}

async fn run(args: &FixArgs, base: &Path) -> Result<()> {
    let only = parse_only(args.only.as_deref().unwrap_or_default())?;

    let Some(diagnosis) = super::diagnose_log(args.log.as_deref(), base).await? else {
        return Ok(());
    };

    println!(
        "{} issue(s) detected in {}.",
        diagnosis.analysis.issues_found.to_string().bold(),
        diagnosis.source.cyan()
    );
    for action in &diagnosis.analysis.recommended_actions {
        println!("  - {}", action);
    }

    let selected = select_issues(&diagnosis.analysis.detected_issues, &only);
    let commands = generate_fix_commands(&selected);

    if commands.is_empty() {
        println!("{}", "No automatic fixes available.".green());
        return Ok(());
    }

    println!("\n{} fix command(s) to run.\n", commands.len().to_string().bold());

    let progress = crate::cli::progress::FixProgress::new();
    let results = run_commands(&ShellRunner, &commands, args.dry_run, |cmd| {
        progress.set_command(cmd);
    })
    .await;
    progress.finish();

    for (cmd, outcome) in &results {
        match outcome {
            CommandOutcome::Succeeded => {
                println!("  {} {}", "OK".green(), cmd);
            }
            CommandOutcome::Failed { code, stderr } => {
                let code = code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string());
                println!("  {} {} (exit {})", "FAILED".red(), cmd, code);
                if !stderr.is_empty() {
                    println!("         {}", stderr.dimmed());
                }
            }
            CommandOutcome::DryRun => {
                println!("  {} {}", "DRY-RUN".cyan(), cmd);
            }
            CommandOutcome::Error(err) => {
                println!("  {} {}: {}", "ERROR".red(), cmd, err);
            }
        }
    }

    if !args.dry_run {
        let (succeeded, failed) = tally(&results);
        println!("\n{} succeeded, {} failed.", succeeded, failed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::analyze;

    #[test]
    fn test_parse_only_accepts_known_ids() {
        let parsed = parse_only(&["gem_dependencies".to_string(), " code_signing".to_string()]).unwrap();
        assert_eq!(parsed, vec![IssueType::GemDependencies, IssueType::CodeSigning]);
    }

    #[test]
    fn test_parse_only_rejects_unknown_id() {
        assert!(parse_only(&["gems".to_string()]).is_err());
    }

    #[test]
    fn test_only_flag_filters_issues() {
        let result = analyze("Could not find gem 'fastlane'\nCode signing is required");
        let selected = select_issues(&result.detected_issues, &[IssueType::GemDependencies]);
        assert_eq!(selected.len(), 1);
        assert_eq!(generate_fix_commands(&selected).len(), 3);
    }

    #[test]
    fn test_empty_only_keeps_everything() {
        let result = analyze("Could not find gem 'fastlane'\nCode signing is required");
        let selected = select_issues(&result.detected_issues, &[]);
        assert_eq!(selected, result.detected_issues);
    }

    #[test]
    fn test_tally_counts_failures_and_errors() {
        let results = vec![
            ("a".to_string(), CommandOutcome::Succeeded),
            (
                "b".to_string(),
                CommandOutcome::Failed {
                    code: Some(1),
                    stderr: String::new(),
                },
            ),
            ("c".to_string(), CommandOutcome::Error("spawn failed".to_string())),
            ("d".to_string(), CommandOutcome::DryRun),
        ];
        assert_eq!(tally(&results), (1, 2));
    }

    #[tokio::test]
    async fn test_dry_run_on_clean_log() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gym.log");
        std::fs::write(&path, "BUILD SUCCEEDED").unwrap();
        let args = FixArgs {
            log: Some(path),
            dry_run: true,
            only: None,
        };
        run(&args, tmp.path()).await.unwrap();
    }
}
