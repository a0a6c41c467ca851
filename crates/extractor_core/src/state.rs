use crate::view_model::{PageViewModel, ToastView};

/// Monotonic counter tagging each extraction request.
///
/// Completions carrying a generation older than the current one belong to a
/// superseded request and are discarded.
pub type Generation = u64;

/// Number of `Msg::Tick`s a toast stays visible before auto-dismissal.
/// The shell ticks every 75 ms, so 40 ticks is the 3 second window.
pub const TOAST_DISMISS_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// The single transient notification the page can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    ticks_remaining: u32,
}

impl Toast {
    fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            ticks_remaining: TOAST_DISMISS_TICKS,
        }
    }
}

/// Lifecycle of the one extraction request the page tracks.
///
/// The variants are replaced wholesale on every transition, so stale
/// summary/error/loading combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Extraction {
    #[default]
    Idle,
    Loading {
        generation: Generation,
    },
    Ready {
        summary: String,
        key_points: Vec<String>,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    extraction: Extraction,
    toast: Option<Toast>,
    generation: Generation,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        let (loading, summary, key_points, error) = match &self.extraction {
            Extraction::Idle => (false, None, Vec::new(), None),
            Extraction::Loading { .. } => (true, None, Vec::new(), None),
            Extraction::Ready {
                summary,
                key_points,
            } => (false, Some(summary.clone()), key_points.clone(), None),
            Extraction::Failed { message } => (false, None, Vec::new(), Some(message.clone())),
        };
        PageViewModel {
            url_input: self.url_input.clone(),
            loading,
            can_export: matches!(self.extraction, Extraction::Ready { .. }),
            summary,
            key_points,
            error,
            toast: self.toast.as_ref().map(|toast| ToastView {
                message: toast.message.clone(),
                kind: toast.kind,
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due, resetting the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.extraction, Extraction::Loading { .. })
    }

    /// The exportable document parts, if a result is on screen.
    ///
    /// Reads the one editable key-point list, so edits made before export
    /// are always reflected in the document.
    pub fn export_snapshot(&self) -> Option<(String, Vec<String>)> {
        match &self.extraction {
            Extraction::Ready {
                summary,
                key_points,
            } => Some((summary.clone(), key_points.clone())),
            _ => None,
        }
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.mark_dirty();
        }
    }

    /// Clears any prior result or error and enters `Loading` under a fresh
    /// generation, which is returned for tagging the request effect.
    pub(crate) fn begin_loading(&mut self) -> Generation {
        self.generation += 1;
        self.extraction = Extraction::Loading {
            generation: self.generation,
        };
        self.mark_dirty();
        self.generation
    }

    /// Whether a completion for `generation` still applies to this state.
    pub(crate) fn accepts_completion(&self, generation: Generation) -> bool {
        matches!(
            self.extraction,
            Extraction::Loading { generation: current } if current == generation
        )
    }

    pub(crate) fn complete_ready(&mut self, summary: String, key_points: Vec<String>) {
        self.extraction = Extraction::Ready {
            summary,
            key_points,
        };
        self.mark_dirty();
    }

    pub(crate) fn complete_failed(&mut self, message: String) {
        self.extraction = Extraction::Failed { message };
        self.mark_dirty();
    }

    pub(crate) fn edit_key_point(&mut self, index: usize, text: String) {
        if let Extraction::Ready { key_points, .. } = &mut self.extraction {
            if let Some(entry) = key_points.get_mut(index) {
                if *entry != text {
                    *entry = text;
                    self.mark_dirty();
                }
            }
        }
    }

    /// Shows `message`, restarting the auto-dismiss window. A toast raised
    /// while another is visible replaces it and its timer.
    pub(crate) fn raise_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast::new(message.into(), kind));
        self.mark_dirty();
    }

    pub(crate) fn dismiss_toast(&mut self) {
        if self.toast.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Ages the visible toast by one tick, clearing it when the window runs
    /// out.
    pub(crate) fn tick_toast(&mut self) {
        let expired = match &mut self.toast {
            Some(toast) => {
                toast.ticks_remaining = toast.ticks_remaining.saturating_sub(1);
                toast.ticks_remaining == 0
            }
            None => return,
        };
        if expired {
            self.toast = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
