mod spawn;

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::RunnerConfig;
use crate::pacing;
use crate::task::{TaskResult, TaskSpec};
use crate::validate;

pub use spawn::run_once;

/// Execute one task: validate the script, resolve its repetition count, then
/// run it that many times in sequence with a randomized pause before each
/// attempt. The first failing attempt ends the task; later attempts are
/// never made.
pub async fn run_task(cfg: &RunnerConfig, task: &TaskSpec) -> TaskResult {
    let started = Instant::now();
    let script = task.script.clone();
    let path = Path::new(&task.script);

    if !validate::validate_script(path) {
        return TaskResult {
            script,
            success: false,
            attempts_made: 0,
            duration_ms: started.elapsed().as_millis() as u64,
            error: Some("validation failed".to_string()),
        };
    }

    let repetitions = task.effective_repetitions();

    for attempt in 1..=repetitions {
        let delay = pacing::random_delay(cfg.min_delay_secs, cfg.max_delay_secs);
        tracing::info!(
            "attempt {}/{} for {}: delay {:.2}s",
            attempt,
            repetitions,
            script,
            delay
        );
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;

        match spawn::run_once(&cfg.command, path).await {
            Ok(output) if output.status.success() => {
                tracing::info!("completed {} (attempt {}/{})", script, attempt, repetitions);
            }
            Ok(output) => {
                let code = normalize_exit(output.status);
                tracing::error!(
                    stdout = %String::from_utf8_lossy(&output.stdout),
                    stderr = %String::from_utf8_lossy(&output.stderr),
                    "{} exited with code {} (attempt {}/{})",
                    script,
                    code,
                    attempt,
                    repetitions
                );
                return TaskResult {
                    script,
                    success: false,
                    attempts_made: attempt,
                    duration_ms: started.elapsed().as_millis() as u64,
                    error: Some(format!("exit code {code} on attempt {attempt}")),
                };
            }
            Err(e) => {
                tracing::error!(
                    "failed to launch {} (attempt {}/{}): {}",
                    script,
                    attempt,
                    repetitions,
                    e
                );
                return TaskResult {
                    script,
                    success: false,
                    attempts_made: attempt,
                    duration_ms: started.elapsed().as_millis() as u64,
                    error: Some(e.to_string()),
                };
            }
        }
    }

    TaskResult {
        script,
        success: true,
        attempts_made: repetitions,
        duration_ms: started.elapsed().as_millis() as u64,
        error: None,
    }
}

fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}
