//! SSH implementation of the `RemoteExecutor` port.
//!
//! One `ssh` process per command, non-interactive (`BatchMode=yes`) so a
//! missing or rejected key fails immediately instead of prompting. The ssh
//! client reserves exit status 255 for its own transport failures; every
//! other nonzero status belongs to the remote command.

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::RemoteExecutor;
use crate::application::stream::LineStream;
use crate::domain::config::ConsoleSettings;
use crate::domain::error::RemoteError;

/// Exit status the ssh client itself reports for connection-level failures.
pub const SSH_TRANSPORT_EXIT: i32 = 255;

/// Channel depth for streamed output; a slow consumer backpressures the
/// reader tasks rather than buffering unboundedly.
const STREAM_BUFFER_LINES: usize = 128;

/// A configured SSH target. Holds no live connection; each call spawns a
/// fresh ssh process against the configured host.
pub struct SshSession {
    settings: ConsoleSettings,
}

impl SshSession {
    #[must_use]
    pub fn new(settings: ConsoleSettings) -> Self {
        Self { settings }
    }

    fn base_args(&self) -> Vec<String> {
        vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=accept-new".to_string(),
            "-p".to_string(),
            self.settings.port.to_string(),
            "-i".to_string(),
            self.settings.private_key.clone(),
            format!("{}@{}", self.settings.username, self.settings.host),
        ]
    }

    fn command(&self, remote_command: &str) -> Command {
        let mut cmd = Command::new("ssh");
        cmd.args(self.base_args())
            .arg(remote_command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl RemoteExecutor for SshSession {
    async fn run(&self, command: &str) -> Result<String, RemoteError> {
        debug!(host = %self.settings.host, command, "running remote command");
        let output = self
            .command(command)
            .output()
            .await
            .map_err(|err| RemoteError::Connection(err.to_string()))?;

        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else if code == SSH_TRANSPORT_EXIT {
            Err(RemoteError::Connection(stderr))
        } else {
            Err(RemoteError::CommandFailed { code, stderr })
        }
    }

    async fn stream(&self, command: &str) -> Result<LineStream, RemoteError> {
        debug!(host = %self.settings.host, command, "streaming remote command");
        let mut child = self
            .command(command)
            .spawn()
            .map_err(|err| RemoteError::Connection(err.to_string()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| RemoteError::Connection("stdout pipe unavailable".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| RemoteError::Connection("stderr pipe unavailable".to_string()))?;

        let (tx, stream) = LineStream::channel(STREAM_BUFFER_LINES);

        let out_tx = tx.clone();
        let stdout_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if out_tx.send(Ok(line)).await.is_err() {
                    break;
                }
            }
        });

        // Stderr lines are forwarded in-stream and also retained so a
        // nonzero exit can report them as the failure detail.
        let err_tx = tx.clone();
        let stderr_task = tokio::spawn(async move {
            let mut retained = Vec::new();
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                retained.push(line.clone());
                if err_tx.send(Ok(line)).await.is_err() {
                    break;
                }
            }
            retained
        });

        tokio::spawn(async move {
            tokio::select! {
                // Consumer dropped the stream: stop the remote command.
                () = tx.closed() => {
                    let _ = child.kill().await;
                }
                result = async {
                    let _ = stdout_task.await;
                    let stderr_lines = stderr_task.await.unwrap_or_default();
                    (child.wait().await, stderr_lines)
                } => {
                    let (status, stderr_lines) = result;
                    let error = match status {
                        Err(err) => Some(RemoteError::Connection(err.to_string())),
                        Ok(status) if status.success() => None,
                        Ok(status) => {
                            let code = status.code().unwrap_or(-1);
                            let stderr = stderr_lines.join("\n").trim().to_string();
                            if code == SSH_TRANSPORT_EXIT {
                                Some(RemoteError::Connection(stderr))
                            } else {
                                Some(RemoteError::CommandFailed { code, stderr })
                            }
                        }
                    };
                    if let Some(error) = error {
                        let _ = tx.send(Err(error)).await;
                    }
                }
            }
        });

        Ok(stream)
    }
}
