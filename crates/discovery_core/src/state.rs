use discovery_logging::{discovery_debug, discovery_info, discovery_warn};

use crate::view_model::{AppViewModel, StageRowView, StageStatus};
use crate::{
    find_language, Effect, InvalidSubmission, ResultItem, SearchError, Stage, TimingConfig,
    DEFAULT_LANGUAGE, FEATURED_RESULTS, STAGE_COUNT,
};

pub type RunId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Processing,
    Results,
}

/// A submission that passed validation: trimmed query, known language codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub languages: Vec<String>,
}

/// Checks a submission before any run is started.
///
/// The query is trimmed; language codes are matched against the catalog,
/// normalized to their catalog spelling and deduplicated in submission order.
pub fn validate_submission<S: AsRef<str>>(
    query: &str,
    languages: &[S],
) -> Result<SearchRequest, InvalidSubmission> {
    let query = query.trim();
    if query.is_empty() {
        return Err(InvalidSubmission::EmptyQuery);
    }
    if languages.is_empty() {
        return Err(InvalidSubmission::NoLanguages);
    }

    let mut codes: Vec<String> = Vec::with_capacity(languages.len());
    for code in languages {
        let code = code.as_ref();
        let language = find_language(code)
            .ok_or_else(|| InvalidSubmission::UnknownLanguage(code.to_string()))?;
        if !codes.iter().any(|known| known == language.code) {
            codes.push(language.code.to_string());
        }
    }

    Ok(SearchRequest {
        query: query.to_string(),
        languages: codes,
    })
}

/// Position of the active run in its timer choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStep {
    /// `step` of the stage's steps have elapsed.
    Stepping { stage: Stage, step: u32 },
    /// Between two stages; `next` starts when the pause elapses.
    Pausing { next: Stage },
    /// Every stage finished; results are revealed when the settle delay elapses.
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRun {
    id: RunId,
    step: RunStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    timing: TimingConfig,
    query: String,
    languages: Vec<String>,
    phase: SearchPhase,
    submitted_query: Option<String>,
    run: Option<ActiveRun>,
    last_run_id: RunId,
    stage_index: usize,
    stage_progress: u8,
    results: Vec<ResultItem>,
    last_error: Option<SearchError>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_timing(TimingConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: TimingConfig) -> Self {
        Self {
            timing,
            query: String::new(),
            languages: vec![DEFAULT_LANGUAGE.to_string()],
            phase: SearchPhase::Idle,
            submitted_query: None,
            run: None,
            last_run_id: 0,
            stage_index: 0,
            stage_progress: 0,
            results: Vec::new(),
            last_error: None,
            dirty: false,
        }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Id of the run currently in flight, if any.
    pub fn active_run(&self) -> Option<RunId> {
        self.run.map(|run| run.id)
    }

    pub fn view(&self) -> AppViewModel {
        let stages = Stage::ALL
            .into_iter()
            .map(|stage| {
                let (status, progress) = match stage.index() {
                    index if index < self.stage_index => (StageStatus::Completed, 100),
                    index if index == self.stage_index => {
                        (StageStatus::Active, self.stage_progress)
                    }
                    _ => (StageStatus::Pending, 0),
                };
                StageRowView {
                    stage,
                    status,
                    progress,
                }
            })
            .collect();

        AppViewModel {
            phase: self.phase,
            query: self.query.clone(),
            selected_languages: self.languages.clone(),
            submitted_query: self.submitted_query.clone(),
            current_stage: self.stage_index,
            stage_progress: self.stage_progress,
            stages,
            results: self.results.clone(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    /// Adds or removes a catalog language. Unknown codes are ignored.
    pub(crate) fn toggle_language(&mut self, code: &str) {
        let Some(language) = find_language(code) else {
            discovery_debug!("ignoring toggle of unknown language `{}`", code);
            return;
        };
        if let Some(pos) = self.languages.iter().position(|c| c == language.code) {
            self.languages.remove(pos);
        } else {
            self.languages.push(language.code.to_string());
        }
        self.dirty = true;
    }

    pub(crate) fn form_request(&self) -> Result<SearchRequest, InvalidSubmission> {
        validate_submission(&self.query, &self.languages)
    }

    pub(crate) fn reject(&mut self, reason: InvalidSubmission) {
        discovery_warn!("search rejected: {}", reason);
        self.last_error = Some(SearchError::InvalidSubmission(reason));
        self.dirty = true;
    }

    /// Starts a new run, cancelling the one in flight if there is one.
    pub(crate) fn start_run(&mut self, request: SearchRequest) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(4);
        if let Some(previous) = self.run.take() {
            let err = SearchError::RunAlreadyActive {
                active: previous.id,
            };
            discovery_warn!("{}", err);
            self.last_error = Some(err);
            effects.push(Effect::CancelTimer);
        } else {
            self.last_error = None;
        }

        self.last_run_id += 1;
        let run_id = self.last_run_id;
        let first = Stage::Intent;

        self.phase = SearchPhase::Processing;
        self.stage_index = first.index();
        self.stage_progress = 0;
        self.results.clear();
        self.query = request.query.clone();
        self.languages = request.languages.clone();
        self.submitted_query = Some(request.query.clone());
        self.run = Some(ActiveRun {
            id: run_id,
            step: RunStep::Stepping {
                stage: first,
                step: 0,
            },
        });
        self.dirty = true;

        discovery_info!(
            "run {} started: query_len={} languages={:?}",
            run_id,
            request.query.len(),
            request.languages
        );

        effects.push(Effect::SearchRequested {
            run_id,
            query: request.query,
            languages: request.languages,
        });
        effects.push(Effect::ProgressChanged {
            run_id,
            stage_index: first.index(),
            percent: 0,
        });
        effects.push(Effect::ScheduleTimer {
            run_id,
            delay: self.timing.step_delay(first),
        });
        effects
    }

    /// Moves the active run one timer tick forward.
    ///
    /// Ticks addressed to any other run are ignored; they can only come from a
    /// timer armed before a restart or a new search.
    pub(crate) fn advance_run(&mut self, run_id: RunId) -> Vec<Effect> {
        let Some(mut run) = self.run else {
            discovery_debug!("ignoring timer for run {}: no run active", run_id);
            return Vec::new();
        };
        if run.id != run_id {
            discovery_debug!(
                "ignoring stale timer for run {} (active run {})",
                run_id,
                run.id
            );
            return Vec::new();
        }

        let effects = match run.step {
            RunStep::Stepping { stage, step } => {
                let step = step + 1;
                let percent = self.timing.percent_after(step);
                self.stage_progress = percent;

                let delay = if step < self.timing.steps_per_stage() {
                    run.step = RunStep::Stepping { stage, step };
                    self.timing.step_delay(stage)
                } else if let Some(next) = stage.next() {
                    discovery_debug!("stage `{}` complete", stage);
                    run.step = RunStep::Pausing { next };
                    self.timing.inter_stage_pause()
                } else {
                    discovery_debug!("stage `{}` complete, settling", stage);
                    run.step = RunStep::Settling;
                    self.stage_index = STAGE_COUNT;
                    self.timing.settle_delay()
                };

                vec![
                    Effect::ProgressChanged {
                        run_id,
                        stage_index: stage.index(),
                        percent,
                    },
                    Effect::ScheduleTimer { run_id, delay },
                ]
            }
            RunStep::Pausing { next } => {
                self.stage_index = next.index();
                self.stage_progress = 0;
                run.step = RunStep::Stepping {
                    stage: next,
                    step: 0,
                };
                vec![
                    Effect::ProgressChanged {
                        run_id,
                        stage_index: next.index(),
                        percent: 0,
                    },
                    Effect::ScheduleTimer {
                        run_id,
                        delay: self.timing.step_delay(next),
                    },
                ]
            }
            RunStep::Settling => {
                self.phase = SearchPhase::Results;
                self.results = FEATURED_RESULTS.to_vec();
                self.run = None;
                self.dirty = true;
                discovery_info!(
                    "run {} complete with {} results",
                    run_id,
                    self.results.len()
                );
                return vec![Effect::ResultsReady {
                    run_id,
                    results: self.results.clone(),
                }];
            }
        };

        self.run = Some(run);
        self.dirty = true;
        effects
    }

    /// Discards the current run or result set and returns to an empty search form.
    pub(crate) fn reset_to_idle(&mut self) -> Vec<Effect> {
        if self.phase == SearchPhase::Idle {
            return Vec::new();
        }

        let cancelled = self.run.take();
        if let Some(run) = cancelled {
            discovery_info!("run {} cancelled by new search", run.id);
        }

        self.phase = SearchPhase::Idle;
        self.stage_index = 0;
        self.stage_progress = 0;
        self.results.clear();
        self.submitted_query = None;
        self.last_error = None;
        self.query.clear();
        self.languages = vec![DEFAULT_LANGUAGE.to_string()];
        self.dirty = true;

        if cancelled.is_some() {
            vec![Effect::CancelTimer]
        } else {
            Vec::new()
        }
    }
}
