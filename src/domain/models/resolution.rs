use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a memoized resolution.
///
/// Transitions are `NotStarted -> InProgress -> Done | Failed`; a finished
/// resolution is never repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    NotStarted,
    InProgress,
    Done,
    Failed,
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}
