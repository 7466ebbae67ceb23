// src/core/explanation.rs

use crate::core::models::ExplanationBlock;
use once_cell::sync::Lazy;
use regex::Regex;

// One or more blank lines (whitespace-only lines count as blank).
static RE_PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n(?:[ \t]*\n)+").expect("paragraph break pattern is a valid literal")
});

/// Splits an explanation into title/body blocks.
///
/// Paragraphs are separated by blank lines; paragraphs with no visible
/// text are dropped. Each paragraph's first line becomes the title and the
/// remaining lines are joined with a single space.
pub fn split_explanation(text: &str) -> Vec<ExplanationBlock> {
    let normalized = text.replace("\r\n", "\n");

    RE_PARAGRAPH_BREAK
        .split(&normalized)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| {
            let mut lines = segment.trim_matches('\n').split('\n');
            let title = lines.next().unwrap_or_default().to_string();
            let body = lines.collect::<Vec<_>>().join(" ");
            ExplanationBlock { title, body }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines() {
        let blocks = split_explanation("Title A\nbody line 1\nbody line2\n\nTitle B\nbody");
        assert_eq!(
            blocks,
            vec![
                ExplanationBlock { title: "Title A".into(), body: "body line 1 body line2".into() },
                ExplanationBlock { title: "Title B".into(), body: "body".into() },
            ]
        );
    }

    #[test]
    fn empty_explanation_yields_no_blocks() {
        assert!(split_explanation("").is_empty());
        assert!(split_explanation("\n\n  \n\n").is_empty());
    }

    #[test]
    fn title_only_paragraph_has_empty_body() {
        let blocks = split_explanation("Risk");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Risk");
        assert_eq!(blocks[0].body, "");
    }

    #[test]
    fn tolerates_crlf_and_extra_blank_lines() {
        let blocks = split_explanation("Summary\r\nok\r\n\r\n\r\n  \nNext\nsteps here");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "ok");
        assert_eq!(blocks[1].title, "Next");
        assert_eq!(blocks[1].body, "steps here");
    }
}
