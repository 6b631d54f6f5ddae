//! Subprocess generator adapter.
//!
//! Spawns a configured external command once per stage, writes the prompt
//! to its stdin, and reads stdout to EOF. The stage name is appended as the
//! final argument so a wrapper script can select its own role handling.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::trait_def::{Generator, Stage};

/// Default wall-time limit for one generator invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Adapter for any CLI text generator (prompt on stdin, response on
/// stdout).
#[derive(Debug, Clone)]
pub struct SubprocessGenerator {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl SubprocessGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Generator for SubprocessGenerator {
    fn name(&self) -> &str {
        "subprocess"
    }

    async fn generate(&self, stage: Stage, prompt: &str) -> Result<String> {
        debug!(%stage, command = %self.command, "spawning generator subprocess");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(stage.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn generator command {:?}", self.command))?;

        let mut stdin = child
            .stdin
            .take()
            .context("generator subprocess has no stdin")?;

        // Feed stdin while collecting output, all inside the timeout: a
        // prompt larger than the pipe buffer must not stall past the
        // deadline, and the child may exit without draining its stdin.
        let interact = async {
            let (write_result, output_result) = tokio::join!(
                async {
                    let result = stdin.write_all(prompt.as_bytes()).await;
                    // Dropping stdin closes the pipe so the child sees EOF.
                    drop(stdin);
                    result
                },
                child.wait_with_output()
            );
            match write_result {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(anyhow::Error::new(e)
                        .context("failed to write prompt to generator stdin"));
                }
            }
            output_result.context("failed to collect generator output")
        };

        let output = tokio::time::timeout(self.timeout, interact)
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "generator timed out after {}s during {stage} stage",
                    self.timeout.as_secs()
                )
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "generator exited with {} during {stage} stage: {}",
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8(output.stdout).context("generator output is not UTF-8")?;
        if stdout.trim().is_empty() {
            bail!("generator returned empty output during {stage} stage");
        }

        Ok(stdout)
    }
}
