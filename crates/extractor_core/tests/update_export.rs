use std::sync::Once;

use extractor_core::{update, AppState, Effect, Msg, PAGE_TITLE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(extractor_logging::initialize_for_tests);
}

fn ready_state(summary: &str, key_points: &[&str]) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("https://example.com/article".to_string()),
    );
    let (state, _) = update(state, Msg::SubmitRequested);
    let (state, _) = update(
        state,
        Msg::ExtractionSucceeded {
            generation: 1,
            summary: summary.to_string(),
            key_points: key_points.iter().map(ToString::to_string).collect(),
        },
    );
    state
}

#[test]
fn export_without_result_does_nothing() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::ExportRequested);

    assert!(effects.is_empty());
    assert_eq!(state, next);
}

#[test]
fn export_effect_carries_current_document() {
    init_logging();
    let state = ready_state("Para one.\n\nPara two.", &["A", "B"]);

    let (_state, effects) = update(state, Msg::ExportRequested);

    assert_eq!(
        effects,
        vec![Effect::ExportPdf {
            title: PAGE_TITLE.to_string(),
            summary: "Para one.\n\nPara two.".to_string(),
            key_points: vec!["A".to_string(), "B".to_string()],
        }]
    );
}

#[test]
fn edits_are_reflected_in_the_export() {
    init_logging();
    let state = ready_state("summary", &["A", "B"]);
    let (state, _) = update(
        state,
        Msg::KeyPointEdited {
            index: 1,
            text: "B, revised".to_string(),
        },
    );

    assert_eq!(
        state.view().key_points,
        vec!["A".to_string(), "B, revised".to_string()]
    );

    let (_state, effects) = update(state, Msg::ExportRequested);
    assert_eq!(
        effects,
        vec![Effect::ExportPdf {
            title: PAGE_TITLE.to_string(),
            summary: "summary".to_string(),
            key_points: vec!["A".to_string(), "B, revised".to_string()],
        }]
    );
}

#[test]
fn out_of_range_edit_is_ignored() {
    init_logging();
    let state = ready_state("summary", &["A"]);

    let (next, effects) = update(
        state.clone(),
        Msg::KeyPointEdited {
            index: 5,
            text: "nowhere".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, next);
}

#[test]
fn export_outcome_is_reported_via_toast() {
    init_logging();
    let state = ready_state("summary", &["A"]);

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            result: Ok("extracted-summary.pdf".to_string()),
        },
    );
    assert_eq!(
        state.view().toast.expect("toast").message,
        "Saved extracted-summary.pdf"
    );

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            result: Err("Could not write the PDF file.".to_string()),
        },
    );
    assert_eq!(
        state.view().toast.expect("toast").message,
        "Could not write the PDF file."
    );
}
