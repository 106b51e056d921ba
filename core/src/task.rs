use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::repeat;

/// One entry in the run list: a script path plus an optional explicit
/// repetition count. When `repetitions` is unset the legacy filename suffix
/// is consulted instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub script: String,

    #[serde(default)]
    pub repetitions: Option<u32>,
}

impl TaskSpec {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            repetitions: None,
        }
    }

    /// Explicit count wins; the filename suffix is the fallback.
    pub fn effective_repetitions(&self) -> u32 {
        match self.repetitions {
            Some(n) => n.max(1),
            None => repeat::parse_repetitions(Path::new(&self.script)),
        }
    }
}

/// Outcome of one script across its whole attempt sequence.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    pub script: String,
    pub success: bool,
    /// Attempts actually made; stops at the first failure.
    pub attempts_made: u32,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Aggregate outcome of a whole run, partitioned by script.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
    pub duration_ms: u64,
}

impl ExecutionSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}
