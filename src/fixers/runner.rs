use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

use super::traits::{CommandOutput, CommandRunner};

/// Runs commands through `sh -c`.
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        let output = Command::new("sh").arg("-c").arg(command).output().await?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Succeeded,
    Failed { code: Option<i32>, stderr: String },
    DryRun,
    Error(String),
}

impl CommandOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CommandOutcome::Failed { .. } | CommandOutcome::Error(_))
    }
}

/// Run `commands` one after another. A failing command is recorded and the
/// batch carries on with the next one.
pub async fn run_commands<F>(
    runner: &dyn CommandRunner,
    commands: &[String],
    dry_run: bool,
    mut on_start: F,
) -> Vec<(String, CommandOutcome)>
where
    F: FnMut(&str),
{
    let mut results = Vec::with_capacity(commands.len());

    for command in commands {
        let outcome = if dry_run {
            CommandOutcome::DryRun
        } else {
            on_start(command);
            tracing::debug!(command = %command, "running fix command");
            match runner.run(command).await {
                Ok(output) if output.success => {
                    tracing::debug!(command = %command, stdout = %output.stdout.trim(), "fix command succeeded");
                    CommandOutcome::Succeeded
                }
                Ok(output) => {
                    tracing::warn!(command = %command, code = ?output.code, "fix command failed");
                    CommandOutcome::Failed {
                        code: output.code,
                        stderr: output.stderr.trim().to_string(),
                    }
                }
                Err(e) => {
                    tracing::warn!(command = %command, error = %e, "fix command could not be started");
                    CommandOutcome::Error(e.to_string())
                }
            }
        };
        results.push((command.clone(), outcome));
    }

    results
}
