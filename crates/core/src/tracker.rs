//! The heading tracker.
//!
//! [`HeadingTracker::update`] is the whole behaviour: it runs synchronously
//! inside a scroll or load handler, recomputes everything from the document
//! and writes only when the current heading actually changes.

use crate::config::TrackerConfig;
use crate::error::{ConfigError, TrackerError};
use crate::href::{find_link, fragment_suffix};
use crate::selection::{identified, select_heading};
use crate::state::CurrentHeading;
use tocspy_traits::DocumentAccessor;

/// What a single update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The document has no heading with a non-empty identifier.
    NoHeadings,
    /// Nothing is in the proximity band; the previous highlight stays.
    Frozen { current: Option<String> },
    /// The selected heading is already the highlighted one.
    Unchanged { id: String },
    /// No navigation link points at the selected heading. Nothing was written.
    LinkMissing { id: String },
    /// The active marker moved to the link for `id`.
    Activated { id: String, previous: Option<String> },
}

impl UpdateOutcome {
    /// True only when the active marker moved.
    pub fn changed(&self) -> bool {
        matches!(self, UpdateOutcome::Activated { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadingTracker {
    config: TrackerConfig,
    current: CurrentHeading,
}

impl HeadingTracker {
    /// Create a tracker with a validated configuration and no current heading.
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            current: CurrentHeading::new(),
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Identifier of the heading last highlighted, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.get()
    }

    /// Recompute the current heading and move the active marker if needed.
    ///
    /// Errors come only from the document accessor; the recorded heading is
    /// never changed by a failed update.
    pub fn update<D>(&mut self, doc: &mut D) -> Result<UpdateOutcome, TrackerError>
    where
        D: DocumentAccessor + ?Sized,
    {
        let headings = identified(doc.headings()?);
        if headings.is_empty() {
            log::trace!("{}: no identified headings", doc.name());
            return Ok(UpdateOutcome::NoHeadings);
        }

        let Some(selected) = select_heading(&headings, &self.current, self.config.band()) else {
            return Ok(UpdateOutcome::Frozen {
                current: self.current.get().map(str::to_string),
            });
        };

        if self.current.matches(&selected.id) {
            return Ok(UpdateOutcome::Unchanged {
                id: selected.id.clone(),
            });
        }

        let suffix = fragment_suffix(&doc.pathname()?, &selected.id);
        let links = doc.nav_links()?;
        let Some(target) = find_link(&links, &suffix).map(|link| link.index) else {
            log::debug!("No navigation link ends with '{}'", suffix);
            return Ok(UpdateOutcome::LinkMissing {
                id: selected.id.clone(),
            });
        };

        for link in links.iter().filter(|link| link.index != target) {
            doc.set_link_active(link.index, false)?;
        }
        doc.set_link_active(target, true)?;

        let id = selected.id.clone();
        let previous = self.current.set(id.clone());
        log::debug!("Active heading {:?} -> '{}'", previous, id);

        Ok(UpdateOutcome::Activated { id, previous })
    }
}
