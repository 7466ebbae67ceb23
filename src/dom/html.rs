// src/dom/html.rs

use super::element::{Element, Node};

const VOID_TAGS: [&str; 3] = ["input", "br", "img"];

pub fn outer_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    for child in &element.children {
        write_node(child, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, out),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&element.classes.join(" "), out);
        out.push('"');
    }
    if let Some(id) = &element.id {
        out.push_str(" id=\"");
        escape_into(id, out);
        out.push('"');
    }
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    if element.disabled {
        out.push_str(" disabled");
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

/// Backend strings (file names, verdicts, explanations) are untrusted,
/// so every text run and attribute value goes through here.
fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
