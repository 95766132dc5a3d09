use super::*;
use crate::state::lookup::LookupError;

#[test]
fn error_text_is_empty_until_a_failure_lands() {
    let mut state = LookupState::default();
    assert_eq!(error_text(&state), "");

    state.begin();
    assert_eq!(error_text(&state), "");
}

#[test]
fn error_text_carries_the_error_display_string() {
    let mut state = LookupState::default();
    let token = state.begin();
    state.finish_failure(token, LookupError::NotFound);
    assert_eq!(error_text(&state), "Pokémon not found!");

    let token = state.begin();
    state.finish_failure(token, LookupError::RequestFailed);
    assert_eq!(error_text(&state), "Something went wrong. Please try again.");
}

#[test]
fn error_text_clears_when_the_next_lookup_begins() {
    let mut state = LookupState::default();
    let token = state.begin();
    state.finish_failure(token, LookupError::NotFound);

    state.begin();
    assert_eq!(error_text(&state), "");
}
