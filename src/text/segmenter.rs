use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::Segment;
use crate::text::{cleaner::clean_text, heading::is_heading};

/// Heading given to the single segment emitted when no heading is found.
pub const MAIN_CONTENT_HEADING: &str = "Main Content";

static SECTION_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)*)").expect("SECTION_NUMBER_REGEX is a valid regex pattern")
});

#[derive(Default)]
struct SegmentBuffer {
    heading: Option<String>,
    lines: Vec<String>,
}

impl SegmentBuffer {
    fn headed(heading: &str) -> Self {
        Self {
            heading: Some(heading.to_string()),
            lines: Vec::new(),
        }
    }

    /// Turns the buffer into a segment, or `None` when it never got content.
    fn finish(self) -> Option<Segment> {
        if self.lines.is_empty() {
            return None;
        }

        let section_number = self.heading.as_deref().and_then(section_number_of);
        Some(Segment {
            heading: self.heading,
            section_number,
            content: self.lines.join("\n"),
        })
    }
}

/// Leading dotted numeral of a heading, e.g. `"2.1"` for `"2.1 Cell Structure"`.
pub fn section_number_of(heading: &str) -> Option<String> {
    SECTION_NUMBER_REGEX
        .captures(heading)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Splits already-cleaned text into heading-delimited segments, in document order.
pub fn segment_text(cleaned: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = SegmentBuffer::default();
    let mut saw_heading = false;

    for line in cleaned.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_heading(line) {
            saw_heading = true;
            let finished = std::mem::replace(&mut current, SegmentBuffer::headed(line));
            segments.extend(finished.finish());
        } else {
            current.lines.push(line.to_string());
        }
    }
    segments.extend(current.finish());

    // Headingless text and heading-only text both collapse to one segment.
    if !saw_heading || segments.is_empty() {
        segments.clear();
        segments.push(Segment {
            heading: Some(MAIN_CONTENT_HEADING.to_string()),
            section_number: None,
            content: cleaned.to_string(),
        });
    }

    segments
}

/// Cleans raw extracted text and segments it.
pub fn clean_and_segment(raw: &str) -> Vec<Segment> {
    segment_text(&clean_text(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "Preface text before any heading.\n\
        1. Introduction\n\
        cells are the basic unit of life.\n\
        they were first observed in cork.\n\
        \n\
        1.1 Cell Theory\n\
        all living things are made of cells.\n\
        KEY TERMS\n\
        GLOSSARY\n\
        nucleus: the control centre of the cell.";

    #[test]
    fn test_text_without_headings_becomes_main_content() {
        let text = "this is the whole document.\nit has no headings at all.\n\nstill none here.";
        let segments = segment_text(text);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].heading.as_deref(), Some(MAIN_CONTENT_HEADING));
        assert_eq!(segments[0].section_number, None);
        assert_eq!(segments[0].content, text);
    }

    #[test]
    fn test_plain_lowercase_notes_are_not_left_unheaded() {
        let segments = segment_text("plain lowercase notes.\nsecond line here.");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].heading.as_deref(), Some(MAIN_CONTENT_HEADING));
        assert_eq!(segments[0].content, "plain lowercase notes.\nsecond line here.");
    }

    #[test]
    fn test_headings_without_content_yield_main_content() {
        let text = "INTRODUCTION\nSUMMARY";
        let segments = segment_text(text);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].heading.as_deref(), Some(MAIN_CONTENT_HEADING));
        assert_eq!(segments[0].content, text);
    }

    #[test]
    fn test_segments_follow_document_order() {
        let segments = segment_text(NOTES);
        let headings: Vec<Option<&str>> = segments.iter().map(|s| s.heading.as_deref()).collect();

        assert_eq!(
            headings,
            vec![
                None,
                Some("1. Introduction"),
                Some("1.1 Cell Theory"),
                Some("GLOSSARY"),
            ]
        );
        assert_eq!(
            segments[1].content,
            "cells are the basic unit of life.\nthey were first observed in cork."
        );
    }

    #[test]
    fn test_empty_heading_buffers_are_discarded() {
        let segments = segment_text(NOTES);
        assert!(segments
            .iter()
            .all(|s| s.heading.as_deref() != Some("KEY TERMS")));
        assert!(segments.iter().all(|s| !s.content.is_empty()));
    }

    #[test]
    fn test_contents_reproduce_every_body_line_once() {
        let segments = segment_text(NOTES);
        let joined: Vec<String> = segments
            .iter()
            .flat_map(|s| s.content.lines().map(str::to_string))
            .collect();

        let body: Vec<String> = NOTES
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !is_heading(l))
            .map(str::to_string)
            .collect();

        assert_eq!(joined, body);
    }

    #[test]
    fn test_section_numbers_come_from_dotted_numerals() {
        let segments = segment_text(NOTES);

        assert_eq!(segments[0].section_number, None);
        assert_eq!(segments[1].section_number.as_deref(), Some("1"));
        assert_eq!(segments[2].section_number.as_deref(), Some("1.1"));
        assert_eq!(segments[3].section_number, None);
    }

    #[test]
    fn test_section_number_is_prefix_of_heading() {
        let text = "2.3.1 Enzymes\nbody one\n4. Summary\nbody two\nChapter 5\nbody three";
        for segment in segment_text(text) {
            if let Some(number) = &segment.section_number {
                let heading = segment.heading.as_deref().unwrap_or_default();
                assert!(heading.starts_with(number.as_str()));
            }
        }
        assert_eq!(section_number_of("2.3.1 Enzymes").as_deref(), Some("2.3.1"));
        assert_eq!(section_number_of("Chapter 5"), None);
    }

    #[test]
    fn test_clean_and_segment_strips_artifacts_first() {
        let raw = "1. Basics\nfirst fact here.\n\n\n3\n-----\n2. Advanced\nsecond   fact here.";
        let segments = clean_and_segment(raw);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].content, "first fact here.");
        assert_eq!(segments[1].content, "second fact here.");
    }
}
