// src/dom/mod.rs

// A small in-memory document. Renderers build element trees carrying the
// class names collaborator stylesheets key on, and the document serializes
// them back to HTML.

pub mod document;
pub mod element;
pub mod html;

pub use document::{Document, SharedDocument};
pub use element::{Element, Node};
