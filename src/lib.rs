#![doc(test(attr(deny(warnings))))]

//! Receipt Core turns raw OCR text from photographed receipts into structured
//! expense records, with session-scoped totals and reporting views.

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod ocr;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Receipt Core tracing initialized.");
    });
}
