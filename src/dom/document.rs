// src/dom/document.rs

use super::element::{Element, Node};
use super::html;
use std::sync::{Arc, Mutex, PoisonError};

// --- Collaborator node identifiers ---
pub const UPLOAD_FORM: &str = "uploadForm";
pub const FILE_INPUT: &str = "fileInput";
pub const AI_BOX: &str = "aiBox";
pub const HISTORY_LIST: &str = "historyList";

pub const SCAN_LABEL: &str = "Scan File";
pub const BUSY_LABEL: &str = "Scanning...";

/// The page the front end renders into.
///
/// Besides the element tree the document tracks a render epoch for the
/// result area. Every time `aiBox` is replaced the epoch moves forward,
/// which lets in-flight reveals notice that their content is gone.
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
    epoch: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Builds the page skeleton with the nodes the renderers expect.
    /// The submit control starts disabled because nothing is selected yet.
    pub fn new() -> Self {
        let form = Element::new("form")
            .with_id(UPLOAD_FORM)
            .child(
                Element::new("input")
                    .with_id(FILE_INPUT)
                    .attr("type", "file")
                    .attr("name", "file"),
            )
            .child(Element::new("button").attr("type", "submit").disabled(true).text(SCAN_LABEL));

        let body = Element::new("body")
            .child(form)
            .child(Element::new("div").with_id(AI_BOX))
            .child(Element::new("div").with_id(HISTORY_LIST));

        Self { body, epoch: 0 }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    /// The first button inside the upload form.
    pub fn submit_button(&self) -> Option<&Element> {
        self.get(UPLOAD_FORM)?.find_by_tag("button")
    }

    pub fn submit_button_mut(&mut self) -> Option<&mut Element> {
        self.get_mut(UPLOAD_FORM)?.find_by_tag_mut("button")
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_button().is_some_and(|button| !button.disabled)
    }

    pub fn set_submit_state(&mut self, enabled: bool, label: &str) {
        if let Some(button) = self.submit_button_mut() {
            button.disabled = !enabled;
            button.set_text(label);
        }
    }

    /// Replaces the children of the result area and starts a new epoch.
    ///
    /// # Returns
    /// The epoch that now owns the result area.
    pub fn replace_result_area(&mut self, nodes: Vec<Node>) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(area) = self.get_mut(AI_BOX) {
            area.children = nodes;
            area.scroll_top = 0;
        }
        self.epoch
    }

    pub fn append_to_result_area(&mut self, node: impl Into<Node>) {
        if let Some(area) = self.get_mut(AI_BOX) {
            area.append_child(node);
        }
    }

    pub fn replace_children(&mut self, id: &str, nodes: Vec<Node>) {
        if let Some(element) = self.get_mut(id) {
            element.children = nodes;
        }
    }

    /// Scroll height of an element, measured in rendered rows.
    pub fn scroll_height(&self, id: &str) -> usize {
        self.get(id).map(Element::rows).unwrap_or(0)
    }

    /// Moves the scroll position of `id` to its maximum.
    pub fn pin_to_bottom(&mut self, id: &str) {
        let height = self.scroll_height(id);
        if let Some(element) = self.get_mut(id) {
            element.scroll_top = height;
        }
    }

    pub fn is_pinned_to_bottom(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|element| element.scroll_top >= element.rows())
    }

    /// Serializes the children of `id`, the same markup a browser
    /// would report as `innerHTML`.
    pub fn inner_html(&self, id: &str) -> String {
        self.get(id).map(html::inner_html).unwrap_or_default()
    }
}

/// Thread-safe handle to a `Document`, shared between the controller,
/// the reveal tasks and the terminal renderer.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument(Arc<Mutex<Document>>);

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self(Arc::new(Mutex::new(document)))
    }

    /// Runs `f` with exclusive access to the document. The lock is
    /// never held across an await point.
    pub fn with<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> Document {
        self.with(|document| document.clone())
    }
}
