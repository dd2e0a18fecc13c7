//! DocumentAccessor trait for abstracting the host document.
//!
//! The tracker never touches a live DOM directly. It reads headings and
//! navigation anchors, and toggles the active marker, through this trait so
//! the selection logic runs the same in a browser and in a unit test.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for document access operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Document unavailable: {0}")]
    Unavailable(String),

    #[error("Query '{selector}' failed: {message}")]
    Query { selector: String, message: String },

    #[error("Could not toggle class '{class}': {message}")]
    ClassUpdate { class: String, message: String },

    #[error("Navigation link {index} out of range (document has {len} links)")]
    LinkOutOfRange { index: usize, len: usize },
}

/// A heading element and its viewport-relative top offset.
///
/// The offset is read at call time and never cached between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPosition {
    /// The heading's `id` attribute. May be empty.
    pub id: String,
    /// Distance from the top edge of the viewport; negative once scrolled past.
    pub top: f64,
}

impl HeadingPosition {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }

    /// Whether the heading carries a usable identifier.
    pub fn is_identified(&self) -> bool {
        !self.id.is_empty()
    }
}

/// An anchor inside the navigation container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavAnchor {
    /// Position of the anchor in document order. Used as the write handle.
    pub index: usize,
    /// The raw `href` attribute (empty when absent).
    pub href: String,
    /// Whether the anchor currently carries the active marker.
    pub active: bool,
}

/// Read/write access to the parts of a document the highlighter needs.
///
/// # Implementations
///
/// - `WebDocument` (in `tocspy-wasm`): the live browser DOM via `web-sys`
/// - `InMemoryDocument`: a scripted page for tests and headless use
pub trait DocumentAccessor: Debug {
    /// List every heading (levels 1-6) in document order, including those
    /// without an identifier.
    fn headings(&self) -> Result<Vec<HeadingPosition>, DocumentError>;

    /// List every navigation anchor in document order.
    ///
    /// Indices returned here are valid for `set_link_active` until the next
    /// call to `nav_links`.
    fn nav_links(&mut self) -> Result<Vec<NavAnchor>, DocumentError>;

    /// Add or remove the active marker on the anchor at `index`.
    fn set_link_active(&mut self, index: usize, active: bool) -> Result<(), DocumentError>;

    /// The current page path, excluding query and fragment.
    fn pathname(&self) -> Result<String, DocumentError>;

    /// Returns a human-readable name for this accessor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory document.
///
/// Headings and links are declared up front; offsets can then be moved to
/// simulate scrolling. Every `set_link_active` call is counted so callers can
/// assert that an update performed no writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    pathname: String,
    headings: Vec<HeadingPosition>,
    links: Vec<NavAnchor>,
    writes: usize,
    detached: bool,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose every operation fails with `DocumentError::Unavailable`.
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    pub fn with_pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = pathname.into();
        self
    }

    /// Append a heading in document order.
    pub fn with_heading(mut self, id: impl Into<String>, top: f64) -> Self {
        self.headings.push(HeadingPosition::new(id, top));
        self
    }

    /// Append a navigation anchor in document order.
    pub fn with_link(self, href: impl Into<String>) -> Self {
        self.with_link_state(href, false)
    }

    /// Append a navigation anchor that starts out carrying the active marker.
    pub fn with_active_link(self, href: impl Into<String>) -> Self {
        self.with_link_state(href, true)
    }

    fn with_link_state(mut self, href: impl Into<String>, active: bool) -> Self {
        let index = self.links.len();
        self.links.push(NavAnchor {
            index,
            href: href.into(),
            active,
        });
        self
    }

    /// Move the heading with `id` to a new offset.
    ///
    /// Returns `false` if no heading has that identifier.
    pub fn set_heading_top(&mut self, id: &str, top: f64) -> bool {
        match self.headings.iter_mut().find(|h| h.id == id) {
            Some(heading) => {
                heading.top = top;
                true
            }
            None => false,
        }
    }

    /// Scroll the viewport down by `delta` units, moving every heading up.
    pub fn scroll_by(&mut self, delta: f64) {
        for heading in &mut self.headings {
            heading.top -= delta;
        }
    }

    /// Indices of every anchor carrying the active marker.
    pub fn active_links(&self) -> Vec<usize> {
        self.links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.index)
            .collect()
    }

    /// The `href` of the single active anchor, if exactly one is active.
    pub fn active_href(&self) -> Option<&str> {
        let mut active = self.links.iter().filter(|l| l.active);
        match (active.next(), active.next()) {
            (Some(link), None) => Some(link.href.as_str()),
            _ => None,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.links.get(index).is_some_and(|l| l.active)
    }

    /// Number of `set_link_active` calls since creation or the last reset.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn reset_write_count(&mut self) {
        self.writes = 0;
    }

    fn ensure_attached(&self) -> Result<(), DocumentError> {
        if self.detached {
            Err(DocumentError::Unavailable(
                "in-memory document is detached".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl DocumentAccessor for InMemoryDocument {
    fn headings(&self) -> Result<Vec<HeadingPosition>, DocumentError> {
        self.ensure_attached()?;
        Ok(self.headings.clone())
    }

    fn nav_links(&mut self) -> Result<Vec<NavAnchor>, DocumentError> {
        self.ensure_attached()?;
        Ok(self.links.clone())
    }

    fn set_link_active(&mut self, index: usize, active: bool) -> Result<(), DocumentError> {
        self.ensure_attached()?;
        let len = self.links.len();
        let link = self
            .links
            .get_mut(index)
            .ok_or(DocumentError::LinkOutOfRange { index, len })?;
        link.active = active;
        self.writes += 1;
        Ok(())
    }

    fn pathname(&self) -> Result<String, DocumentError> {
        self.ensure_attached()?;
        Ok(self.pathname.clone())
    }

    fn name(&self) -> &'static str {
        "InMemoryDocument"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryDocument {
        InMemoryDocument::new()
            .with_pathname("/guide")
            .with_heading("intro", 10.0)
            .with_heading("", 40.0)
            .with_heading("usage", 400.0)
            .with_link("/guide/#intro")
            .with_link("/guide/#usage")
    }

    #[test]
    fn test_headings_preserve_document_order() {
        let doc = sample();
        let ids: Vec<_> = doc.headings().unwrap().into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["intro", "", "usage"]);
    }

    #[test]
    fn test_heading_is_identified() {
        assert!(HeadingPosition::new("a", 0.0).is_identified());
        assert!(!HeadingPosition::new("", 0.0).is_identified());
    }

    #[test]
    fn test_links_are_indexed_in_order() {
        let mut doc = sample();
        let links = doc.nav_links().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].index, 0);
        assert_eq!(links[1].index, 1);
        assert_eq!(links[1].href, "/guide/#usage");
        assert!(links.iter().all(|l| !l.active));
    }

    #[test]
    fn test_set_link_active_counts_writes() {
        let mut doc = sample();
        doc.set_link_active(1, true).unwrap();
        doc.set_link_active(0, false).unwrap();

        assert!(doc.is_active(1));
        assert!(!doc.is_active(0));
        assert_eq!(doc.active_links(), vec![1]);
        assert_eq!(doc.active_href(), Some("/guide/#usage"));
        assert_eq!(doc.write_count(), 2);

        doc.reset_write_count();
        assert_eq!(doc.write_count(), 0);
    }

    #[test]
    fn test_set_link_active_out_of_range() {
        let mut doc = sample();
        let err = doc.set_link_active(5, true).unwrap_err();
        assert_eq!(err, DocumentError::LinkOutOfRange { index: 5, len: 2 });
        assert_eq!(doc.write_count(), 0);
    }

    #[test]
    fn test_active_href_requires_exactly_one() {
        let doc = InMemoryDocument::new()
            .with_active_link("/a/#x")
            .with_active_link("/a/#y");
        assert_eq!(doc.active_links(), vec![0, 1]);
        assert_eq!(doc.active_href(), None);

        assert_eq!(InMemoryDocument::new().active_href(), None);
    }

    #[test]
    fn test_scroll_by_moves_every_heading() {
        let mut doc = sample();
        doc.scroll_by(100.0);
        let tops: Vec<_> = doc.headings().unwrap().into_iter().map(|h| h.top).collect();
        assert_eq!(tops, vec![-90.0, -60.0, 300.0]);
    }

    #[test]
    fn test_set_heading_top() {
        let mut doc = sample();
        assert!(doc.set_heading_top("usage", 5.0));
        assert!(!doc.set_heading_top("missing", 5.0));
        assert_eq!(doc.headings().unwrap()[2].top, 5.0);
    }

    #[test]
    fn test_detached_document_fails() {
        let mut doc = InMemoryDocument::detached();
        assert!(matches!(doc.headings(), Err(DocumentError::Unavailable(_))));
        assert!(matches!(doc.nav_links(), Err(DocumentError::Unavailable(_))));
        assert!(matches!(doc.pathname(), Err(DocumentError::Unavailable(_))));
        assert!(doc.set_link_active(0, true).is_err());
    }

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::Query {
            selector: ".toc a".to_string(),
            message: "SyntaxError".to_string(),
        };
        assert!(err.to_string().contains(".toc a"));
        assert!(err.to_string().contains("SyntaxError"));

        let err = DocumentError::ClassUpdate {
            class: "is current".to_string(),
            message: "InvalidCharacterError".to_string(),
        };
        assert!(err.to_string().contains("is current"));
        assert!(err.to_string().contains("InvalidCharacterError"));

        let err = DocumentError::LinkOutOfRange { index: 3, len: 1 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_name() {
        assert_eq!(InMemoryDocument::new().name(), "InMemoryDocument");
    }
}
