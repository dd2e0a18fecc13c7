//! Error handling for WASM bindings.
//!
//! Converts tocspy's error types into JavaScript-friendly errors.

use tocspy_core::{ConfigError, DocumentError, TrackerError};
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid highlighter configuration
    Config,
    /// The document could not be read or written
    Document,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Document => "DOCUMENT_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct TocSpyError {
    code: ErrorCode,
    message: String,
}

impl TocSpyError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn document(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Document, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unknown, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConfigError> for TocSpyError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<DocumentError> for TocSpyError {
    fn from(err: DocumentError) -> Self {
        Self::document(err.to_string())
    }
}

impl From<TrackerError> for TocSpyError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Document(e) => e.into(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for TocSpyError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid configuration object: {}", err))
    }
}

impl From<TocSpyError> for JsValue {
    fn from(err: TocSpyError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}
