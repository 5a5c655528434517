//! Boundary to the external OCR collaborator.
//!
//! The core never performs character recognition itself; it consumes whatever
//! text an [`OcrEngine`] returns. Engine failures travel on their own channel
//! and never leave a partial record behind.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::domain::ExpenseRecord;
use crate::session::Session;

/// Failures originating in the external recognition step.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OCR engine failure: {0}")]
    Engine(String),
}

/// The single blocking external call of the pipeline.
pub trait OcrEngine {
    /// Recognizes all text in a receipt image. The returned string may be
    /// empty and carries no guaranteed structure.
    fn recognize(&self, image: &Path) -> Result<String, OcrError>;
}

/// Engine that reads pre-recognized text from a sidecar dump file. Stands in
/// for a real recognizer in the CLI and in tests; recognition proper happens
/// outside this crate.
#[derive(Debug, Default)]
pub struct TextDumpEngine;

impl OcrEngine for TextDumpEngine {
    fn recognize(&self, image: &Path) -> Result<String, OcrError> {
        Ok(fs::read_to_string(image)?)
    }
}

/// Runs one receipt through the engine and, on success, appends the
/// interpreted record to the session.
///
/// The append is atomic with respect to failure: if recognition errors out,
/// the session's records and running total are untouched.
pub fn scan_receipt<'s>(
    engine: &dyn OcrEngine,
    session: &'s mut Session,
    image: &Path,
) -> Result<&'s ExpenseRecord, OcrError> {
    let text = match engine.recognize(image) {
        Ok(text) => text,
        Err(err) => {
            warn!(image = %image.display(), "recognition failed: {err}");
            return Err(err);
        }
    };
    Ok(session.record_scan(&text))
}
