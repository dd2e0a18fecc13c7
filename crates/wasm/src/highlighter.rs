//! NavHighlighter handle for JavaScript.
//!
//! Owns a tracker bound to the live page and the `scroll`/`load` listeners
//! that drive it.

use crate::dom::WebDocument;
use crate::error::TocSpyError;
use std::cell::RefCell;
use std::rc::Rc;
use tocspy_core::{HeadingTracker, TrackerConfig, TrackerError, UpdateOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

const TRIGGER_EVENTS: [&str; 2] = ["scroll", "load"];

/// Tracker plus the document it reads.
#[derive(Debug)]
struct Session {
    tracker: HeadingTracker,
    document: WebDocument,
}

impl Session {
    fn run(&mut self, trigger: &str) -> Result<UpdateOutcome, TrackerError> {
        let outcome = self.tracker.update(&mut self.document)?;
        log::trace!("{} -> {:?}", trigger, outcome);
        Ok(outcome)
    }
}

/// Registered window listeners. Dropping the closures invalidates them, so
/// they live here until removed.
struct Listeners {
    window: Window,
    handlers: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl Listeners {
    fn remove(self) {
        for (event, handler) in &self.handlers {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove '{}' listener: {:?}", event, e);
            }
        }
    }
}

/// Highlights the table-of-contents link for the heading nearest the top
/// of the viewport.
///
/// # Example
///
/// ```javascript
/// import init, { NavHighlighter } from '@tocspy/wasm';
///
/// await init();
///
/// const nav = new NavHighlighter({ bandBottom: 200 });
/// nav.attach();
/// ```
///
/// The handle must stay reachable while highlighting is wanted; freeing it
/// removes the listeners.
#[wasm_bindgen]
pub struct NavHighlighter {
    session: Rc<RefCell<Session>>,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl NavHighlighter {
    /// Create a highlighter bound to the current page.
    ///
    /// `config` may be omitted, `null`, or an object with any of
    /// `bandTop`, `bandBottom`, `headingSelector`, `linkSelector` and
    /// `activeClass`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NavHighlighter, JsValue> {
        let config = parse_config(config)?;
        let document = WebDocument::from_window(&config).map_err(TocSpyError::from)?;
        let tracker = HeadingTracker::new(config).map_err(TocSpyError::from)?;

        Ok(Self {
            session: Rc::new(RefCell::new(Session { tracker, document })),
            listeners: None,
        })
    }

    /// Start following `scroll` and `load` events on the window.
    ///
    /// If the page has already loaded, the load-time update runs now.
    /// Calling this on an attached highlighter does nothing.
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_some() {
            return Ok(());
        }

        let window =
            web_sys::window().ok_or_else(|| TocSpyError::document("No window object available"))?;
        let mut listeners = Listeners {
            window,
            handlers: Vec::with_capacity(TRIGGER_EVENTS.len()),
        };

        for event in TRIGGER_EVENTS {
            let handler = event_handler(&self.session, event);
            if let Err(e) = listeners
                .window
                .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                listeners.remove();
                return Err(
                    TocSpyError::document(format!("Failed to listen for '{}': {:?}", event, e))
                        .into(),
                );
            }
            listeners.handlers.push((event, handler));
        }

        self.listeners = Some(listeners);
        log::debug!("Navigation highlighter attached");

        let loaded = self
            .session
            .try_borrow()
            .is_ok_and(|s| s.document.is_loaded());
        if loaded {
            run_silently(&self.session, "load");
        }
        Ok(())
    }

    /// Stop following window events. The current highlight is left as is.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.remove();
            log::debug!("Navigation highlighter detached");
        }
    }

    /// Recompute the highlight now.
    ///
    /// Returns `true` if the active link changed.
    #[wasm_bindgen]
    pub fn update(&self) -> Result<bool, JsValue> {
        let mut session = self
            .session
            .try_borrow_mut()
            .map_err(|_| TocSpyError::unknown("Highlighter update already in progress"))?;
        let outcome = session.run("update").map_err(TocSpyError::from)?;
        Ok(outcome.changed())
    }

    /// Identifier of the highlighted heading, or `undefined`.
    #[wasm_bindgen(getter, js_name = currentHeading)]
    pub fn current_heading(&self) -> Option<String> {
        self.session
            .try_borrow()
            .ok()
            .and_then(|s| s.tracker.current().map(str::to_string))
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.listeners.is_some()
    }
}

impl Drop for NavHighlighter {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Create a highlighter and attach it immediately.
#[wasm_bindgen(js_name = startHighlighter)]
pub fn start(config: JsValue) -> Result<NavHighlighter, JsValue> {
    let mut highlighter = NavHighlighter::new(config)?;
    highlighter.attach()?;
    Ok(highlighter)
}

fn event_handler(session: &Rc<RefCell<Session>>, event: &'static str) -> Closure<dyn FnMut()> {
    let session = Rc::clone(session);
    Closure::<dyn FnMut()>::new(move || run_silently(&session, event))
}

/// Event-driven update: failures degrade to "no highlight change".
fn run_silently(session: &RefCell<Session>, event: &str) {
    let Ok(mut session) = session.try_borrow_mut() else {
        log::debug!("Skipping '{}' update: tracker busy", event);
        return;
    };
    if let Err(e) = session.run(event) {
        log::warn!("'{}' update failed: {}", event, e);
    }
}

/// Parse an optional JavaScript configuration object.
fn parse_config(config: JsValue) -> Result<TrackerConfig, TocSpyError> {
    if config.is_undefined() || config.is_null() {
        return Ok(TrackerConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}
