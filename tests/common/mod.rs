#![allow(dead_code)]

pub mod fixtures;
pub mod nav_assertions;

use tocspy::{HeadingTracker, InMemoryDocument, UpdateOutcome};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initialise test logging once per process
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scroll `doc` by each delta in turn, updating after every step.
///
/// Returns the outcomes in order, starting with the load-time update
/// performed before any scrolling.
pub fn scroll_through(
    tracker: &mut HeadingTracker,
    doc: &mut InMemoryDocument,
    deltas: &[f64],
) -> Result<Vec<UpdateOutcome>, tocspy::TrackerError> {
    let mut outcomes = vec![tracker.update(doc)?];
    for delta in deltas {
        doc.scroll_by(*delta);
        outcomes.push(tracker.update(doc)?);
    }
    Ok(outcomes)
}
