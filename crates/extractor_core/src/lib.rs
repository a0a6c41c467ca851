//! Extractor core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Extraction, Generation, Toast, ToastKind, TOAST_DISMISS_TICKS};
pub use update::update;
pub use view_model::{PageViewModel, ToastView, PAGE_TITLE};
