use std::fmt;
use std::path::PathBuf;

use crate::pdf::ExportError;

/// Monotonic tag a request carries so late completions can be matched
/// against the submission that started them.
pub type Generation = u64;

/// Summary and key points returned by the extraction API for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub summary: String,
    pub key_points: Vec<String>,
}

/// Events the engine thread reports back to the shell.
#[derive(Debug)]
pub enum EngineEvent {
    ExtractionCompleted {
        generation: Generation,
        result: Result<ExtractedContent, ExtractError>,
    },
    ExportCompleted {
        result: Result<PathBuf, ExportError>,
    },
}

/// A failed extraction request, with a message fit for the error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    pub kind: FailureKind,
    pub message: String,
}

impl ExtractError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// The API answered with a non-success status.
    Api {
        status: u16,
    },
    /// The API answered 2xx but the body did not match the contract.
    Decode,
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Api { status } => write!(f, "api status {status}"),
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
