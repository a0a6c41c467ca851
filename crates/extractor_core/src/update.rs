use url::Url;

use crate::{AppState, Effect, Msg, ToastKind, PAGE_TITLE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            if state.is_loading() {
                // One request in flight at a time; re-submission is refused.
                return (state, Vec::new());
            }
            let url = state.url_input().trim().to_owned();
            if !is_http_url(&url) {
                state.raise_toast(
                    "Invalid or missing URL. Must start with http:// or https://",
                    ToastKind::Error,
                );
                return (state, Vec::new());
            }
            let generation = state.begin_loading();
            vec![Effect::StartExtraction { generation, url }]
        }
        Msg::ExtractionSucceeded {
            generation,
            summary,
            key_points,
        } => {
            if state.accepts_completion(generation) {
                state.complete_ready(summary, key_points);
                state.raise_toast("Extraction complete!", ToastKind::Info);
            }
            Vec::new()
        }
        Msg::ExtractionFailed {
            generation,
            message,
        } => {
            if state.accepts_completion(generation) {
                state.complete_failed(message.clone());
                state.raise_toast(message, ToastKind::Error);
            }
            Vec::new()
        }
        Msg::KeyPointEdited { index, text } => {
            state.edit_key_point(index, text);
            Vec::new()
        }
        Msg::ExportRequested => match state.export_snapshot() {
            Some((summary, key_points)) => vec![Effect::ExportPdf {
                title: PAGE_TITLE.to_owned(),
                summary,
                key_points,
            }],
            None => Vec::new(),
        },
        Msg::ExportFinished { result } => {
            match result {
                Ok(filename) => {
                    state.raise_toast(format!("Saved {filename}"), ToastKind::Info);
                }
                Err(message) => state.raise_toast(message, ToastKind::Error),
            }
            Vec::new()
        }
        Msg::ToastDismissed => {
            state.dismiss_toast();
            Vec::new()
        }
        Msg::Tick => {
            state.tick_toast();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
