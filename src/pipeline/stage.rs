// src/pipeline/stage.rs

//! Pipeline stages and run outcome.

use std::fmt;
use std::process::ExitCode;

/// Stages of one check run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Normalizing,
    Grouping,
    Persisting,
    Formatting,
    Delivering,
    Done,
    Failed,
}

impl Stage {
    /// Stages that do work, used for step numbering.
    pub const WORK: [Stage; 6] = [
        Stage::Fetching,
        Stage::Normalizing,
        Stage::Grouping,
        Stage::Persisting,
        Stage::Formatting,
        Stage::Delivering,
    ];

    /// 1-based step number of a work stage.
    pub fn step(self) -> Option<usize> {
        Self::WORK.iter().position(|s| *s == self).map(|i| i + 1)
    }

    fn description(self) -> &'static str {
        match self {
            Stage::Fetching => "Fetching - Downloading portal announcement",
            Stage::Normalizing => "Normalizing - Tagging lines with dates",
            Stage::Grouping => "Grouping - Sorting lines by period",
            Stage::Persisting => "Persisting - Writing snapshot",
            Stage::Formatting => "Formatting - Rendering message",
            Stage::Delivering => "Delivering - Sending LINE notification",
            Stage::Done => "Done",
            Stage::Failed => "Failed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Final result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every stage ran; delivery may still have been skipped or rejected
    Done,
    /// The run stopped at the given stage
    Failed(Stage),
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, RunOutcome::Done)
    }

    /// Process exit status: 0 on success, 1 on failure.
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Done => 0,
            RunOutcome::Failed(_) => 1,
        }
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}
