//! `DocumentAccessor` over the live browser DOM.

use tocspy_core::TrackerConfig;
use tocspy_traits::{DocumentAccessor, DocumentError, HeadingPosition, NavAnchor};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Location};

/// The page the module is running in.
///
/// Selectors and the marker class come from the tracker configuration.
/// Anchors listed by the last `nav_links` call are kept so writes address
/// the same elements the tracker just inspected.
#[derive(Debug)]
pub struct WebDocument {
    document: Document,
    location: Location,
    heading_selector: String,
    link_selector: String,
    active_class: String,
    links: Vec<Element>,
}

impl WebDocument {
    pub fn new(document: Document, location: Location, config: &TrackerConfig) -> Self {
        Self {
            document,
            location,
            heading_selector: config.heading_selector.clone(),
            link_selector: config.link_selector.clone(),
            active_class: config.active_class.clone(),
            links: Vec::new(),
        }
    }

    /// Bind to the global `window.document`.
    pub fn from_window(config: &TrackerConfig) -> Result<Self, DocumentError> {
        let window = web_sys::window()
            .ok_or_else(|| DocumentError::Unavailable("No window object available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| DocumentError::Unavailable("Window has no document".to_string()))?;
        Ok(Self::new(document, window.location(), config))
    }

    /// Whether the page has already fired its `load` event.
    pub fn is_loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, DocumentError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| DocumentError::Query {
                selector: selector.to_string(),
                message: format!("{:?}", e),
            })?;

        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl DocumentAccessor for WebDocument {
    fn headings(&self) -> Result<Vec<HeadingPosition>, DocumentError> {
        Ok(self
            .query_all(&self.heading_selector)?
            .iter()
            .map(|el| HeadingPosition::new(el.id(), el.get_bounding_client_rect().top()))
            .collect())
    }

    fn nav_links(&mut self) -> Result<Vec<NavAnchor>, DocumentError> {
        let links = self.query_all(&self.link_selector)?;
        let anchors = links
            .iter()
            .enumerate()
            .map(|(index, el)| NavAnchor {
                index,
                href: el.get_attribute("href").unwrap_or_default(),
                active: el.class_list().contains(&self.active_class),
            })
            .collect();
        self.links = links;
        Ok(anchors)
    }

    fn set_link_active(&mut self, index: usize, active: bool) -> Result<(), DocumentError> {
        let len = self.links.len();
        let el = self
            .links
            .get(index)
            .ok_or(DocumentError::LinkOutOfRange { index, len })?;

        let classes = el.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        result.map_err(|e| DocumentError::ClassUpdate {
            class: self.active_class.clone(),
            message: format!("{:?}", e),
        })
    }

    fn pathname(&self) -> Result<String, DocumentError> {
        self.location
            .pathname()
            .map_err(|e| DocumentError::Unavailable(format!("location.pathname: {:?}", e)))
    }

    fn name(&self) -> &'static str {
        "WebDocument"
    }
}
