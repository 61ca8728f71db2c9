use discovery_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn new_search_while_idle_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NewSearchClicked);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
