use std::fs;
use std::path::{Path, PathBuf};

use surveyrun_core::config::RunnerConfig;

/// Runner config tuned for tests: `sh` fixtures and near-zero pacing.
pub fn test_runner_config() -> RunnerConfig {
    RunnerConfig {
        command: "sh".to_string(),
        min_delay_secs: 0.0,
        max_delay_secs: 0.01,
        workers: 4,
    }
}

/// Write a shell fixture named `name` whose body is `body`; the script's exit
/// status is that of the body's last command.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    path
}
