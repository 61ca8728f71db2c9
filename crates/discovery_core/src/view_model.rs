use crate::{ResultItem, SearchError, SearchPhase, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SearchPhase,
    pub query: String,
    pub selected_languages: Vec<String>,
    /// Query of the run in flight or of the displayed results.
    pub submitted_query: Option<String>,
    /// Index of the active stage; `STAGE_COUNT` once every stage finished.
    pub current_stage: usize,
    pub stage_progress: u8,
    pub stages: Vec<StageRowView>,
    pub results: Vec<ResultItem>,
    pub last_error: Option<SearchError>,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRowView {
    pub stage: Stage,
    pub status: StageStatus,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}
