//! Deciding which heading is current.
//!
//! Headings are scanned as an ordered slice in document order; the first
//! one strictly inside the proximity band wins. Before anything has been
//! highlighted the first heading is taken even when it sits outside the
//! band, so a freshly loaded page always shows a marker. After that, a scan
//! with nothing in the band leaves the previous selection in place.

use crate::state::CurrentHeading;
use tocspy_traits::HeadingPosition;

/// Open interval of viewport offsets counted as "near the top".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityBand {
    pub top: f64,
    pub bottom: f64,
}

impl ProximityBand {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether `offset` lies strictly between the edges. NaN never does.
    pub fn contains(&self, offset: f64) -> bool {
        offset > self.top && offset < self.bottom
    }
}

/// Keep only headings carrying a non-empty identifier, in order.
pub fn identified(headings: Vec<HeadingPosition>) -> Vec<HeadingPosition> {
    headings.into_iter().filter(|h| h.is_identified()).collect()
}

/// Pick the current heading from `headings` (document order).
///
/// Returns `None` when the slice is empty, or when nothing is in the band
/// and a heading has already been highlighted.
pub fn select_heading<'a>(
    headings: &'a [HeadingPosition],
    state: &CurrentHeading,
    band: ProximityBand,
) -> Option<&'a HeadingPosition> {
    if let Some(near) = headings.iter().find(|h| band.contains(h.top)) {
        return Some(near);
    }
    if state.is_unset() {
        return headings.first();
    }
    None
}
