use discovery_core::{InvalidSubmission, ResultItem, RunId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    TimerFired { run_id: RunId },
}

/// What a consumer sees of a run: progress updates, then the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Progress {
        run_id: RunId,
        stage_index: usize,
        percent: u8,
    },
    Completed {
        run_id: RunId,
        results: Vec<ResultItem>,
    },
}

impl Notification {
    pub fn run_id(&self) -> RunId {
        match self {
            Notification::Progress { run_id, .. } | Notification::Completed { run_id, .. } => {
                *run_id
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("search rejected: {0}")]
    Rejected(#[from] InvalidSubmission),
    #[error("search runtime has shut down")]
    Closed,
}
