//! # tocspy-core
//!
//! Platform-agnostic table-of-contents highlighting.
//!
//! On every scroll or load event the [`HeadingTracker`] re-reads the
//! document's headings, picks the one nearest the top of the viewport and
//! moves the active marker onto the matching navigation link:
//! - **config**: proximity band, selectors and marker class
//! - **state**: the identifier of the last highlighted heading
//! - **selection**: which heading counts as current
//! - **href**: which navigation link belongs to a heading
//! - **tracker**: the update routine tying these together
//! - **error**: error types
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. The document is reached
//! only through [`DocumentAccessor`], so the whole algorithm runs against an
//! [`InMemoryDocument`] in tests.

pub use tocspy_traits as traits;

pub mod config;
pub mod error;
pub mod href;
pub mod selection;
pub mod state;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::{ConfigError, TrackerError};
pub use selection::ProximityBand;
pub use state::CurrentHeading;
pub use tracker::{HeadingTracker, UpdateOutcome};

// Re-export the document abstraction
pub use traits::{DocumentAccessor, DocumentError, HeadingPosition, InMemoryDocument, NavAnchor};
