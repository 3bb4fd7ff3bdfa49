//! Browser page environment.
//!
//! [`PageEnvironment`] is the slice of `window`/`document` the shim touches.
//! [`MemoryPage`] implements it in memory for server-side simulation and tests.

use std::collections::HashMap;

use crate::tracker::Tracker;

/// An element in the page document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g., "script").
    pub tag: String,
    /// Element id attribute.
    pub id: Option<String>,
    /// Source URL for script elements.
    pub src: Option<String>,
    /// Whether the script loads asynchronously.
    pub is_async: bool,
}

impl Element {
    /// Asynchronous script element.
    #[must_use]
    pub fn script(id: Option<&str>, src: &str) -> Self {
        Self {
            tag: "script".to_owned(),
            id: id.map(str::to_owned),
            src: Some(src.to_owned()),
            is_async: true,
        }
    }

    /// Non-script element.
    #[must_use]
    pub fn other(tag: &str, id: Option<&str>) -> Self {
        Self {
            tag: tag.to_owned(),
            id: id.map(str::to_owned),
            src: None,
            is_async: false,
        }
    }

    fn is_script(&self) -> bool {
        self.tag.eq_ignore_ascii_case("script")
    }
}

/// Global page context available in a browser.
pub trait PageEnvironment {
    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Insert `element` directly before the first script element, or append it
    /// when the page has no scripts.
    fn insert_before_first_script(&mut self, element: Element);

    /// Global tracker function named `name`, installing a stub if absent.
    fn tracker(&mut self, name: &str) -> &mut Tracker;
}

/// In-memory page.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Vec<Element>,
    globals: HashMap<String, Tracker>,
}

impl MemoryPage {
    /// Empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the given elements in document order.
    #[must_use]
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            globals: HashMap::new(),
        }
    }

    /// Elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements carrying `id`.
    #[must_use]
    pub fn count_id(&self, id: &str) -> usize {
        self.elements
            .iter()
            .filter(|e| e.id.as_deref() == Some(id))
            .count()
    }

    /// Installed global tracker, if any.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<&Tracker> {
        self.globals.get(name)
    }

    /// Mutable access to an installed global, e.g. to load its backend.
    pub fn global_mut(&mut self, name: &str) -> Option<&mut Tracker> {
        self.globals.get_mut(name)
    }
}

impl PageEnvironment for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.count_id(id) > 0
    }

    fn insert_before_first_script(&mut self, element: Element) {
        match self.elements.iter().position(Element::is_script) {
            Some(index) => self.elements.insert(index, element),
            None => self.elements.push(element),
        }
    }

    fn tracker(&mut self, name: &str) -> &mut Tracker {
        self.globals.entry(name.to_owned()).or_default()
    }
}
