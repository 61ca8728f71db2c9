use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand-off point to the search backend. Nothing consumes the payload yet.
    SearchRequested {
        run_id: crate::RunId,
        query: String,
        languages: Vec<String>,
    },
    /// Arm the single timer slot, replacing whatever was armed before.
    ScheduleTimer {
        run_id: crate::RunId,
        delay: Duration,
    },
    CancelTimer,
    ProgressChanged {
        run_id: crate::RunId,
        stage_index: usize,
        percent: u8,
    },
    ResultsReady {
        run_id: crate::RunId,
        results: Vec<crate::ResultItem>,
    },
}
