pub const SUBTITLE: &str = "Extract summaries and key points from any public article URL.";

pub const URL_PANE_TITLE: &str = "Article URL";
pub const URL_PANE_TITLE_LOADING: &str = "Article URL (extracting...)";
pub const SUMMARY_PANE_TITLE: &str = "Summary";
pub const POINTS_PANE_TITLE: &str = "Key Points";
pub const POINTS_PANE_TITLE_EXPORT: &str = "Key Points (Ctrl+S exports PDF)";

pub const SUMMARY_PLACEHOLDER: &str = "Submit a URL to see its summary.";
pub const POINTS_PLACEHOLDER: &str = "No key points yet.";
pub const LOADING_LABEL: &str = "Extracting...";

pub const HELP_LINE: &str =
    "Tab: switch | Enter: submit/edit | Up/Down: select | Ctrl+S: export PDF | Esc: dismiss | Ctrl+C: quit";

pub const TOAST_WIDTH: u16 = 44;
pub const TOAST_HEIGHT: u16 = 3;
