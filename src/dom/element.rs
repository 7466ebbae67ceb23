// src/dom/element.rs

/// A node in the document tree: either an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

/// An element with the handful of properties the renderers touch.
///
/// Elements are built with a small chained builder, which keeps the
/// renderer code close to the markup it produces:
///
/// ```ignore
/// Element::new("div").class("stat").class("malicious").text("Malicious ")
///     .child(Element::new("span").text("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub disabled: bool,
    pub scroll_top: usize,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            disabled: false,
            scroll_top: 0,
            children: Vec::new(),
        }
    }

    // --- Builder ---

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.add_class(class.as_ref());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // --- Classes & attributes ---

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| n != name);
    }

    // --- Content ---

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Replaces every child with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Appends to the trailing text node, creating one if needed.
    pub fn append_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Number of rendered rows: every `div` that holds no nested `div`
    /// occupies one row, containers contribute the rows of their children.
    pub fn rows(&self) -> usize {
        let nested: usize = self.child_elements().map(Element::rows).sum();
        if nested == 0 && self.tag == "div" { 1 } else { nested }
    }

    // --- Lookup ---

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// First descendant (depth-first, document order) with the given tag.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => {
                if element.tag == tag { Some(element) } else { element.find_by_tag_mut(tag) }
            }
            Node::Text(_) => None,
        })
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.tag == tag { Some(child) } else { child.find_by_tag(tag) }
        })
    }

    /// All descendants carrying `class`, in document order.
    pub fn select_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect_class(self, class, &mut found);
        found
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) => collect_text(inner, out),
        }
    }
}

fn collect_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.has_class(class) {
            found.push(child);
        }
        collect_class(child, class, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div").with_id("root").child(
            Element::new("div")
                .class("stat")
                .class("malicious")
                .text("Malicious ")
                .child(Element::new("span").text("3")),
        )
    }

    #[test]
    fn text_content_concatenates_descendants() {
        assert_eq!(sample().text_content(), "Malicious 3");
    }

    #[test]
    fn append_text_extends_trailing_run() {
        let mut slot = Element::new("div");
        slot.append_text("one ");
        slot.append_text("two ");
        assert_eq!(slot.children.len(), 1);
        assert_eq!(slot.text_content(), "one two ");
    }

    #[test]
    fn classes_are_unique_and_removable() {
        let mut el = Element::new("div").class("ai-content").class("ai-typing").class("ai-typing");
        assert_eq!(el.classes, vec!["ai-content", "ai-typing"]);
        el.remove_class("ai-typing");
        assert!(!el.has_class("ai-typing"));
        assert!(el.has_class("ai-content"));
    }

    #[test]
    fn lookup_by_id_and_class() {
        let mut root = sample();
        assert!(root.find_by_id("root").is_some());
        assert!(root.find_by_id("missing").is_none());
        assert_eq!(root.select_class("stat").len(), 1);
        let span = root.find_by_tag_mut("span").expect("span present");
        span.set_text("4");
        assert_eq!(root.text_content(), "Malicious 4");
    }

    #[test]
    fn tag_lookup_descends_past_non_matching_elements() {
        let mut form = Element::new("form")
            .child(Element::new("input").with_id("fileInput"))
            .child(Element::new("div").child(Element::new("button").text("Scan File")));
        let button = form.find_by_tag_mut("button").expect("nested button");
        button.disabled = true;
        assert!(form.find_by_tag("button").is_some_and(|b| b.disabled));
        assert!(form.find_by_tag_mut("select").is_none());
    }

    #[test]
    fn rows_count_leaf_blocks() {
        let root = Element::new("div")
            .child(Element::new("div").text("a"))
            .child(Element::new("div").child(Element::new("div")).child(Element::new("div")));
        assert_eq!(root.rows(), 3);
        assert_eq!(Element::new("div").rows(), 1);
    }
}
