//! Selection state machine tests.

use verteilomat_core::{
    dataset::ImpactDataset,
    error::QueryError,
    ranking::Metric,
    selection::{PickerView, SelectionState},
};

#[test]
fn initial_state_is_empty_absolute_grid() {
    let state = SelectionState::new();
    assert_eq!(state.selected_bracket, None);
    assert_eq!(state.metric, Metric::Absolute);
    assert_eq!(state.hovered_party, None);
    assert_eq!(state.picker, PickerView::Grid);
}

#[test]
fn choose_bracket_keeps_metric_and_hover() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();
    state.set_metric(Metric::Percentage);
    state.hover_party(&dataset, Some("CDU")).unwrap();

    state.choose_bracket(&dataset, "40-55k").unwrap();

    assert_eq!(state.selected_bracket.as_deref(), Some("40-55k"));
    assert_eq!(state.metric, Metric::Percentage);
    assert_eq!(state.hovered_party.as_deref(), Some("CDU"));
    assert_eq!(state.picker, PickerView::Dropdown);
}

#[test]
fn invalid_bracket_leaves_state_unchanged() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();
    state.choose_bracket(&dataset, "10-20k").unwrap();
    let before = state.clone();

    let err = state.choose_bracket(&dataset, "10-21k").unwrap_err();

    assert!(matches!(err, QueryError::InvalidBracket { .. }), "unexpected error: {err}");
    assert_eq!(state, before);
}

#[test]
fn invalid_bracket_from_initial_state_keeps_grid() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();

    assert!(state.choose_bracket(&dataset, "").is_err());
    assert_eq!(state, SelectionState::new());
}

#[test]
fn every_listed_bracket_is_selectable() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();

    for bracket in dataset.list_brackets() {
        state.choose_bracket(&dataset, &bracket.label).unwrap();
        assert_eq!(state.selected_bracket.as_ref(), Some(&bracket.label));
    }
}

#[test]
fn clear_bracket_keeps_dropdown_picker() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();
    state.choose_bracket(&dataset, "250k+").unwrap();

    state.clear_bracket();

    assert_eq!(state.selected_bracket, None);
    assert_eq!(state.picker, PickerView::Dropdown);
}

#[test]
fn hover_accepts_known_party_and_clears() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();

    state.hover_party(&dataset, Some("Grüne")).unwrap();
    assert_eq!(state.hovered_party.as_deref(), Some("Grüne"));

    state.hover_party(&dataset, None).unwrap();
    assert_eq!(state.hovered_party, None);
}

#[test]
fn hover_on_unknown_party_is_rejected_without_change() {
    let dataset = ImpactDataset::reference();
    let mut state = SelectionState::new();
    state.hover_party(&dataset, Some("SPD")).unwrap();

    let err = state.hover_party(&dataset, Some("Gruene")).unwrap_err();

    assert!(matches!(err, QueryError::UnknownParty { .. }), "unexpected error: {err}");
    assert_eq!(state.hovered_party.as_deref(), Some("SPD"));
}

#[test]
fn set_metric_toggles_freely() {
    let mut state = SelectionState::new();
    state.set_metric(Metric::Percentage);
    assert_eq!(state.metric, Metric::Percentage);
    state.set_metric(Metric::Absolute);
    assert_eq!(state.metric, Metric::Absolute);
}
