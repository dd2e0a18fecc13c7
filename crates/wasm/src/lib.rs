//! WebAssembly bindings for tocspy.
//!
//! This crate wires the platform-agnostic [`tocspy_core::HeadingTracker`] to a
//! real page: headings and table-of-contents anchors are read through
//! `web-sys`, and the tracker runs on every `scroll` and `load` event of the
//! window.
//!
//! ## Module Structure
//!
//! - [`dom`] - `WebDocument`, the `DocumentAccessor` over the live DOM
//! - [`highlighter`] - `NavHighlighter` handle and event bindings
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { startHighlighter } from '@tocspy/wasm';
//!
//! await init();
//!
//! // Default: `.toc a` links, `active` class, 0-300px band.
//! const nav = startHighlighter();
//! ```
//!
//! The page is expected to render its table of contents as anchors whose
//! `href` ends in `<page path>/#<heading id>`.

pub mod dom;
mod error;
mod highlighter;

pub use dom::WebDocument;
pub use error::{ErrorCode, TocSpyError};
pub use highlighter::{NavHighlighter, start};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the tocspy-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
