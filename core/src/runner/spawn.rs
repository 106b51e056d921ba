use std::path::Path;
use std::process::{Output, Stdio};

use tokio::process::Command;

use crate::error::RunnerError;

/// Run one attempt of `script` under `command`, waiting for exit and
/// capturing both output streams. Nothing is inherited to the parent's
/// console; captured text only surfaces through the logger.
pub async fn run_once(command: &str, script: &Path) -> Result<Output, RunnerError> {
    let mut cmd = Command::new(command);
    cmd.arg(script)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    cmd.output()
        .await
        .map_err(|e| RunnerError::Spawn(e.to_string()))
}
