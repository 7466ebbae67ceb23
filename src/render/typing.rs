// src/render/typing.rs

use crate::dom::document::{AI_BOX, Document, SharedDocument};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Marker class present on a slot while its text is being revealed.
pub const TYPING_CLASS: &str = "ai-typing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every token was written and the marker removed.
    Completed,
    /// The result area was replaced or the slot disappeared mid-reveal.
    Cancelled,
}

/// Handle to one in-flight reveal.
#[derive(Debug)]
pub struct RevealHandle {
    task: JoinHandle<RevealOutcome>,
}

impl RevealHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the reveal to end. A task that panicked or was aborted
    /// counts as cancelled.
    pub async fn finished(self) -> RevealOutcome {
        self.task.await.unwrap_or(RevealOutcome::Cancelled)
    }
}

/// Reveals `text` word by word into the element `target_id`.
///
/// Each word is appended with a trailing space, then the task sleeps for
/// `delay` before the next one. Reveals run as independent tasks, so
/// several blocks interleave freely while each keeps its own order.
///
/// The reveal belongs to the result-area epoch current at the time of the
/// call. Before every step it checks that the epoch is unchanged and the
/// slot still exists, and stops otherwise.
///
/// Must be called from within a tokio runtime.
pub fn type_writer(
    document: &SharedDocument,
    target_id: impl Into<String>,
    text: &str,
    delay: Duration,
) -> RevealHandle {
    let slot = target_id.into();
    let words: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
    let epoch = document.with(|doc| doc.epoch());
    let document = document.clone();

    let task = tokio::spawn(async move {
        trace!(slot = %slot, words = words.len(), "Reveal started.");
        for word in &words {
            if !document.with(|doc| append_word(doc, epoch, &slot, word)) {
                debug!(slot = %slot, "Reveal cancelled, result area was replaced.");
                return RevealOutcome::Cancelled;
            }
            tokio::time::sleep(delay).await;
        }

        if document.with(|doc| finish(doc, epoch, &slot)) {
            trace!(slot = %slot, "Reveal completed.");
            RevealOutcome::Completed
        } else {
            debug!(slot = %slot, "Reveal cancelled before completion.");
            RevealOutcome::Cancelled
        }
    });

    RevealHandle { task }
}

fn append_word(doc: &mut Document, epoch: u64, target: &str, word: &str) -> bool {
    if doc.epoch() != epoch {
        return false;
    }
    let Some(slot) = doc.get_mut(target) else {
        return false;
    };
    slot.append_text(word);
    slot.append_text(" ");
    doc.pin_to_bottom(AI_BOX);
    true
}

fn finish(doc: &mut Document, epoch: u64, target: &str) -> bool {
    if doc.epoch() != epoch {
        return false;
    }
    match doc.get_mut(target) {
        Some(slot) => {
            slot.remove_class(TYPING_CLASS);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};

    const SLOT: &str = "ai-content-0";
    const DELAY: Duration = Duration::from_millis(18);

    fn document_with_slot() -> SharedDocument {
        let shared = SharedDocument::new(Document::new());
        shared.with(|doc| {
            doc.replace_result_area(vec![
                Element::new("div")
                    .class("ai-block")
                    .child(Element::new("div").class("ai-content").class(TYPING_CLASS).with_id(SLOT))
                    .into(),
            ])
        });
        shared
    }

    fn slot_state(doc: &SharedDocument) -> (String, bool) {
        doc.with(|d| {
            let slot = d.get(SLOT).expect("slot present");
            (slot.text_content(), slot.has_class(TYPING_CLASS))
        })
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_words_with_trailing_spaces() {
        let doc = document_with_slot();
        let handle = type_writer(&doc, SLOT, "one two three", DELAY);

        // The first word lands as soon as the task runs.
        tokio::time::sleep(Duration::from_millis(1)).await;
        let (text, typing) = slot_state(&doc);
        assert_eq!(text, "one ");
        assert!(typing);

        tokio::time::sleep(DELAY).await;
        assert_eq!(slot_state(&doc).0, "one two ");

        assert_eq!(handle.finished().await, RevealOutcome::Completed);
        let (text, typing) = slot_state(&doc);
        assert_eq!(text, "one two three ");
        assert!(!typing);
        assert!(doc.with(|d| d.is_pinned_to_bottom(AI_BOX)));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_body_only_clears_marker() {
        let doc = document_with_slot();
        let outcome = type_writer(&doc, SLOT, "", DELAY).finished().await;
        assert_eq!(outcome, RevealOutcome::Completed);
        assert_eq!(slot_state(&doc), (String::new(), false));
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_result_area_cancels_reveal() {
        let doc = document_with_slot();
        let handle = type_writer(&doc, SLOT, "stale words that must not leak", DELAY);
        tokio::time::sleep(Duration::from_millis(1)).await;

        // A new render reuses the same slot id under a fresh epoch.
        doc.with(|d| {
            d.replace_result_area(vec![Element::new("div").with_id(SLOT).into()])
        });

        assert_eq!(handle.finished().await, RevealOutcome::Cancelled);
        assert_eq!(doc.with(|d| d.get(SLOT).map(Element::text_content)), Some(String::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn independent_reveals_interleave() {
        let shared = SharedDocument::new(Document::new());
        shared.with(|d| {
            d.replace_result_area(vec![
                Element::new("div").with_id("a").into(),
                Element::new("div").with_id("b").into(),
            ])
        });
        let first = type_writer(&shared, "a", "1 2 3 4", DELAY);
        let second = type_writer(&shared, "b", "x y", DELAY);

        assert_eq!(second.finished().await, RevealOutcome::Completed);
        assert!(!first.is_finished());
        assert_eq!(first.finished().await, RevealOutcome::Completed);
        shared.with(|d| {
            assert_eq!(d.get("a").map(Element::text_content).as_deref(), Some("1 2 3 4 "));
            assert_eq!(d.get("b").map(Element::text_content).as_deref(), Some("x y "));
        });
    }
}
