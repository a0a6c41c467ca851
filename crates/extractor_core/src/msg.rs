use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for extraction.
    SubmitRequested,
    /// Engine completed an extraction request with a result.
    ExtractionSucceeded {
        generation: Generation,
        summary: String,
        key_points: Vec<String>,
    },
    /// Engine reported a failed extraction request.
    ExtractionFailed {
        generation: Generation,
        message: String,
    },
    /// User replaced the text of one key point.
    KeyPointEdited { index: usize, text: String },
    /// User asked for the current result to be exported as a PDF.
    ExportRequested,
    /// Engine finished a PDF export; `Ok` carries the saved filename.
    ExportFinished { result: Result<String, String> },
    /// User dismissed the toast manually.
    ToastDismissed,
    /// UI tick to age the toast and coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
