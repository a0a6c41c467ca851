use crate::Generation;

/// Side effects requested by `update`, executed by the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start an extraction request for `url`, tagged with its generation.
    StartExtraction { generation: Generation, url: String },
    /// Render the current result into a PDF document and save it.
    ExportPdf {
        title: String,
        summary: String,
        key_points: Vec<String>,
    },
}
