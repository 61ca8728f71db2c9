use thiserror::Error;

use crate::RunId;

/// Reasons a submission is refused before any run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSubmission {
    #[error("query is empty")]
    EmptyQuery,
    #[error("no language selected")]
    NoLanguages,
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid submission: {0}")]
    InvalidSubmission(#[from] InvalidSubmission),
    /// A search was submitted while another run was in flight. The old run is
    /// cancelled and the new one starts from the first stage.
    #[error("run {active} was still active and has been restarted")]
    RunAlreadyActive { active: RunId },
}
