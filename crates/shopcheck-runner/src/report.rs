//! Run report types
//!
//! The report is the run's single execution outcome: per-step status, the
//! console errors observed, and the screenshot artifact path. Produced once
//! per run, never retried.

use serde::{Deserialize, Serialize};
use shopcheck_browser::ConsoleEntry;
use std::path::PathBuf;

/// Status of one step in the verification sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Passed,
    Skipped,
    Failed,
}

/// Outcome of one step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Step name
    pub step: String,
    /// Step status
    pub status: StepStatus,
    /// Further detail (skip reason, failure message)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Report for one verification run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Overall outcome
    pub success: bool,
    /// Steps in execution order
    pub steps: Vec<StepOutcome>,
    /// Console errors captured during the run
    pub console_errors: Vec<ConsoleEntry>,
    /// Screenshot written for this outcome, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<PathBuf>,
    /// Message of the fatal error, when the run failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_passed(&mut self, step: &str) {
        self.steps.push(StepOutcome {
            step: step.to_string(),
            status: StepStatus::Passed,
            detail: None,
        });
    }

    pub fn record_skipped(&mut self, step: &str, reason: &str) {
        self.steps.push(StepOutcome {
            step: step.to_string(),
            status: StepStatus::Skipped,
            detail: Some(reason.to_string()),
        });
    }

    pub fn record_failed(&mut self, step: &str, message: &str) {
        self.steps.push(StepOutcome {
            step: step.to_string(),
            status: StepStatus::Failed,
            detail: Some(message.to_string()),
        });
    }

    /// Name of the failed step, if any
    pub fn failed_step(&self) -> Option<&str> {
        self.steps
            .iter()
            .find(|s| s.status == StepStatus::Failed)
            .map(|s| s.step.as_str())
    }
}
