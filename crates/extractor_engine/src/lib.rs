//! Extractor engine: extraction API client, PDF rendering, and effect
//! execution on a background runtime.
mod client;
mod engine;
mod pdf;
mod persist;
mod types;

pub use client::{
    ClientSettings, ExtractClient, ReqwestExtractClient, GENERIC_API_ERROR, NETWORK_ERROR_MESSAGE,
};
pub use engine::{EngineConfig, EngineHandle};
pub use pdf::{
    plan_document, render_document, DocumentSpec, ExportError, TextOp, EXPORT_FILENAME,
    PAGE_BOTTOM_MM,
};
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use types::{EngineEvent, ExtractError, ExtractedContent, FailureKind, Generation};
