#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    QueryChanged(String),
    /// User toggled a language in the preference list.
    LanguageToggled(String),
    /// User submitted the search form with its current query and languages.
    SearchSubmitted,
    /// Programmatic submission carrying its own query and languages.
    SubmitSearch {
        query: String,
        languages: Vec<String>,
    },
    /// The scheduled timer of a run elapsed.
    TimerFired { run_id: crate::RunId },
    /// User clicked New Search.
    NewSearchClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
