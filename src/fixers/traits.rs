use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run one shell command to completion.
    ///
    /// `Err` means the command could not be started at all; a non-zero
    /// exit is reported through `CommandOutput::success`.
    async fn run(&self, command: &str) -> Result<CommandOutput>;
}
