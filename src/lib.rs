//! # tocspy
//!
//! Highlights the table-of-contents link for the heading nearest the top of
//! the viewport.
//!
//! This crate re-exports the platform-agnostic pieces:
//! - [`HeadingTracker`] decides which heading is current and moves the
//!   active marker
//! - [`DocumentAccessor`] is the document capability the tracker reads and
//!   writes through
//! - [`InMemoryDocument`] implements it without a browser
//!
//! Browser bindings live in the `tocspy-wasm` crate.
//!
//! ```
//! use tocspy::{HeadingTracker, InMemoryDocument, UpdateOutcome};
//!
//! let mut doc = InMemoryDocument::new()
//!     .with_pathname("/guide")
//!     .with_heading("intro", 40.0)
//!     .with_link("/guide/#intro");
//! let mut tracker = HeadingTracker::default();
//!
//! let outcome = tracker.update(&mut doc).unwrap();
//! assert!(matches!(outcome, UpdateOutcome::Activated { .. }));
//! assert_eq!(doc.active_href(), Some("/guide/#intro"));
//! ```

pub use tocspy_core::{
    ConfigError, CurrentHeading, HeadingTracker, ProximityBand, TrackerConfig, TrackerError,
    UpdateOutcome,
};
pub use tocspy_traits::{
    DocumentAccessor, DocumentError, HeadingPosition, InMemoryDocument, NavAnchor,
};

/// Run one update and log any document failure instead of returning it.
///
/// This is the behaviour expected of an event handler: a broken document
/// degrades to "no highlight change". Returns whether the marker moved.
pub fn update_silently<D>(tracker: &mut HeadingTracker, doc: &mut D) -> bool
where
    D: DocumentAccessor + ?Sized,
{
    match tracker.update(doc) {
        Ok(outcome) => outcome.changed(),
        Err(e) => {
            log::warn!("Highlight update on {} failed: {}", doc.name(), e);
            false
        }
    }
}
