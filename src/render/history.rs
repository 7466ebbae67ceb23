// src/render/history.rs

use crate::core::history::ScanHistory;
use crate::core::models::HistoryEntry;
use crate::dom::document::HISTORY_LIST;
use crate::dom::{Document, Element, Node};

pub fn history_item(entry: &HistoryEntry) -> Element {
    Element::new("div")
        .class("history-item")
        .child(Element::new("div").class("history-file").text(entry.filename.clone()))
        .child(
            Element::new("div")
                .class("history-verdict")
                .class(entry.class)
                .text(entry.verdict.clone()),
        )
}

/// Rebuilds the history list from scratch, most recent first.
pub fn render_history(doc: &mut Document, history: &ScanHistory) {
    let items: Vec<Node> = history.iter().map(|entry| history_item(entry).into()).collect();
    doc.replace_children(HISTORY_LIST, items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{HistoryClass, ScanResult};

    #[test]
    fn renders_entries_in_stored_order() {
        let mut history = ScanHistory::new();
        for (name, malicious, suspicious) in [("old.txt", 0, 0), ("mid.doc", 0, 2), ("new.exe", 4, 0)] {
            let result = ScanResult {
                filename: name.into(),
                verdict: format!("verdict for {name}"),
                malicious,
                suspicious,
                ..ScanResult::default()
            };
            history.record(HistoryEntry::from(&result));
        }

        let mut doc = Document::new();
        render_history(&mut doc, &history);
        let list = doc.get(HISTORY_LIST).expect("history list");

        let files: Vec<String> = list.select_class("history-file").iter().map(|f| f.text_content()).collect();
        assert_eq!(files, ["new.exe", "mid.doc", "old.txt"]);

        let verdicts = list.select_class("history-verdict");
        assert!(verdicts[0].has_class(HistoryClass::Danger.as_ref()));
        assert!(verdicts[1].has_class("history-warning"));
        assert!(verdicts[2].has_class("history-safe"));

        // A second render replaces rather than appends.
        render_history(&mut doc, &history);
        assert_eq!(doc.get(HISTORY_LIST).map(|l| l.select_class("history-item").len()), Some(3));
    }
}
