//! Discovery core: pure search state machine, static catalogs and view-model helpers.
mod catalog;
mod effect;
mod error;
mod msg;
mod state;
mod timing;
mod update;
mod view_model;

pub use catalog::{
    find_language, Language, ResultItem, ResultKind, Score, Stage, DEFAULT_LANGUAGE,
    FEATURED_RESULTS, LANGUAGES, STAGE_COUNT,
};
pub use effect::Effect;
pub use error::{InvalidSubmission, SearchError};
pub use msg::Msg;
pub use state::{validate_submission, AppState, RunId, SearchPhase, SearchRequest};
pub use timing::{ConfigError, TimingConfig, STEPS_PER_STAGE};
pub use update::update;
pub use view_model::{AppViewModel, StageRowView, StageStatus};
