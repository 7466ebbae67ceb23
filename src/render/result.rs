// src/render/result.rs

use crate::core::explanation::split_explanation;
use crate::core::models::{ExplanationBlock, ScanResult};
use crate::dom::{Element, Node, SharedDocument};
use crate::render::typing::{RevealHandle, TYPING_CLASS, type_writer};
use std::time::Duration;
use tracing::debug;

pub const DETECTION_TITLE: &str = "Detection Breakdown";
pub const EXPLANATION_TITLE: &str = "AI Security Explanation";
pub const LOADING_TEXT: &str = "Scanning... please wait.";

/// Identifier of the text slot of explanation block `index`.
pub fn content_slot_id(index: usize) -> String {
    format!("ai-content-{index}")
}

fn section_title(text: &str) -> Node {
    Element::new("div").class("section-title").text(text).into()
}

/// Badge, counters and section titles, everything except the explanation.
pub fn summary_nodes(result: &ScanResult) -> Vec<Node> {
    let mut nodes = vec![
        Element::new("div")
            .class("risk-badge")
            .class(result.risk_level())
            .text(result.verdict.clone())
            .into(),
        section_title(DETECTION_TITLE),
    ];

    for (stat, count) in result.detection_stats() {
        nodes.push(
            Element::new("div")
                .class("stat")
                .class(stat)
                .text(format!("{} ", stat.label()))
                .child(Element::new("span").text(count.to_string()))
                .into(),
        );
    }

    nodes.push(section_title(EXPLANATION_TITLE));
    nodes
}

/// An explanation block with an empty, still-typing content slot.
pub fn block_node(index: usize, block: &ExplanationBlock) -> Element {
    Element::new("div")
        .class("ai-block")
        .child(Element::new("div").class("ai-title").text(format!("• {}", block.title)))
        .child(
            Element::new("div")
                .class("ai-content")
                .class(TYPING_CLASS)
                .with_id(content_slot_id(index)),
        )
}

pub fn loading_nodes() -> Vec<Node> {
    vec![Element::new("div").class("loading").text(LOADING_TEXT).into()]
}

pub fn error_nodes(message: &str) -> Vec<Node> {
    vec![
        Element::new("div")
            .class("error")
            .child(Element::new("b").text("Error:"))
            .text(format!(" {message}"))
            .into(),
    ]
}

/// Renders `result` into the result area and starts one reveal per
/// explanation block.
///
/// The whole structure, empty content slots included, is in the document
/// before the first word is revealed.
///
/// # Returns
/// The reveal handles, in block order.
pub fn render_scan_result(
    document: &SharedDocument,
    result: &ScanResult,
    typing_delay: Duration,
) -> Vec<RevealHandle> {
    let blocks = split_explanation(&result.ai_explanation);
    debug!(filename = %result.filename, blocks = blocks.len(), risk = %result.risk_level(), "Rendering scan result.");

    document.with(|doc| {
        doc.replace_result_area(summary_nodes(result));
        for (index, block) in blocks.iter().enumerate() {
            doc.append_to_result_area(block_node(index, block));
        }
    });

    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| type_writer(document, content_slot_id(index), &block.body, typing_delay))
        .collect()
}
