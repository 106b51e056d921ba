use serde::{Deserialize, Serialize};

use crate::task::TaskSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    /// Scripts to run, in submission order. Falls back to the bundled survey
    /// set when the config names none.
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskSpec>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            runner: RunnerConfig::default(),
            tasks: default_tasks(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "surveyrun_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Interpreter used to invoke each script.
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_min_delay_secs")]
    pub min_delay_secs: f64,

    #[serde(default = "default_max_delay_secs")]
    pub max_delay_secs: f64,

    /// Upper bound on scripts executing at the same time.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_command() -> String {
    "python3".to_string()
}

fn default_min_delay_secs() -> f64 {
    3.0
}

fn default_max_delay_secs() -> f64 {
    10.0
}

fn default_workers() -> usize {
    4
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            min_delay_secs: default_min_delay_secs(),
            max_delay_secs: default_max_delay_secs(),
            workers: default_workers(),
        }
    }
}

fn default_tasks() -> Vec<TaskSpec> {
    [
        "Automation-Survey/Automation/BSME-2-M-105.py",
        "Automation-Survey/Automation/BSA-3-M-20.py",
        "Automation-Survey/Automation/BSED-2-F-20.py",
        "Automation-Survey/Automation/BSED-3-M-5.py",
        "Automation-Survey/Automation/BSED-3-F-40.py",
    ]
    .into_iter()
    .map(TaskSpec::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.runner.command, "python3");
        assert_eq!(cfg.runner.workers, 4);
        assert_eq!(cfg.runner.min_delay_secs, 3.0);
        assert_eq!(cfg.runner.max_delay_secs, 10.0);
        assert_eq!(cfg.tasks.len(), 5);
        assert!(cfg.logging.enabled);
    }

    #[test]
    fn configured_tasks_replace_default_list() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [runner]
            workers = 2

            [[tasks]]
            script = "a-3.py"

            [[tasks]]
            script = "b.py"
            repetitions = 6
            "#,
        )
        .unwrap();

        assert_eq!(cfg.runner.workers, 2);
        assert_eq!(cfg.tasks.len(), 2);
        assert_eq!(cfg.tasks[0].repetitions, None);
        assert_eq!(cfg.tasks[1].repetitions, Some(6));
    }
}
