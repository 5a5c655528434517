use thiserror::Error;

use crate::ocr::OcrError;

/// Error type that captures the failures a scan workflow can surface.
///
/// Interpretation itself is total: missing amounts or keyword matches are
/// normal outcomes, not errors. Everything here originates at the edges
/// (the external recognizer, the filesystem, or serialization).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("interpretation failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
