use crate::{validate_submission, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::LanguageToggled(code) => {
            state.toggle_language(&code);
            Vec::new()
        }
        Msg::SearchSubmitted => match state.form_request() {
            Ok(request) => state.start_run(request),
            Err(reason) => {
                state.reject(reason);
                Vec::new()
            }
        },
        Msg::SubmitSearch { query, languages } => {
            match validate_submission(&query, &languages) {
                Ok(request) => state.start_run(request),
                Err(reason) => {
                    state.reject(reason);
                    Vec::new()
                }
            }
        }
        Msg::TimerFired { run_id } => state.advance_run(run_id),
        Msg::NewSearchClicked => state.reset_to_idle(),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
