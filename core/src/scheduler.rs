use std::sync::Arc;
use std::time::Instant;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;

use crate::config::AppConfig;
use crate::runner;
use crate::task::{ExecutionSummary, TaskResult};

/// Fan the configured tasks out over a bounded pool and collect results in
/// completion order. Nothing a task does can abort its siblings: panics and
/// join failures are folded into the failed list.
pub async fn run_all(cfg: &AppConfig) -> ExecutionSummary {
    let started = Instant::now();
    let sem = Arc::new(Semaphore::new(cfg.runner.workers.max(1)));
    let mut futs: FuturesUnordered<_> = FuturesUnordered::new();

    for task in cfg.tasks.clone() {
        let sem = sem.clone();
        let runner_cfg = cfg.runner.clone();
        let script = task.script.clone();

        let handle = tokio::spawn(async move {
            let _permit = match sem.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    return TaskResult {
                        script: task.script.clone(),
                        success: false,
                        attempts_made: 0,
                        duration_ms: 0,
                        error: Some("worker pool closed unexpectedly".to_string()),
                    }
                }
            };
            runner::run_task(&runner_cfg, &task).await
        });

        futs.push(async move { (script, handle.await) });
    }

    let mut summary = ExecutionSummary::default();

    while let Some((script, joined)) = futs.next().await {
        match joined {
            Ok(result) if result.success => summary.succeeded.push(script),
            Ok(result) => {
                if let Some(err) = &result.error {
                    tracing::debug!(
                        "{} failed after {} attempts: {}",
                        script,
                        result.attempts_made,
                        err
                    );
                }
                summary.failed.push(script);
            }
            Err(e) => {
                tracing::error!("unexpected error while collecting result for {}: {}", script, e);
                summary.failed.push(script);
            }
        }
    }

    summary.duration_ms = started.elapsed().as_millis() as u64;
    summary
}
