use clap::Parser;
mod cli;
use std::sync::OnceLock;

use surveyrun_core::config;
use surveyrun_core::error::CliError;
use surveyrun_core::{scheduler, TaskSpec};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let mut cfg = config::load_default(args.config.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;

    if let Some(workers) = args.workers {
        cfg.runner.workers = workers.max(1);
    }
    if !args.scripts.is_empty() {
        cfg.tasks = args.scripts.iter().cloned().map(TaskSpec::new).collect();
    }

    init_tracing(&cfg.logging).map_err(CliError::Command)?;

    let summary = scheduler::run_all(&cfg).await;

    tracing::info!("execution summary:");
    tracing::info!("successful scripts: {:?}", summary.succeeded);
    tracing::info!("failed scripts: {:?}", summary.failed);
    tracing::info!(
        action = "run.summary",
        summary = %serde_json::to_string(&summary).unwrap_or_default()
    );

    // Partial failure is reported through the log only; the exit code stays 0.
    Ok(0)
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: startup / IO error
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Command(_) | CliError::Io(_) => 20,
        CliError::Runner(_) | CliError::Anyhow(_) => 50,
    }
}

fn init_tracing(logging: &config::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("surveyrun"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let appender = tracing_appender::rolling::never(dir, "surveyrun.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
