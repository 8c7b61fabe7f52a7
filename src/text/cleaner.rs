use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\s*$").expect("PAGE_NUMBER_REGEX is a valid regex pattern"));

static PAGE_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*page\s+\d+(?:\s+of\s+\d+)?\s*$")
        .expect("PAGE_LABEL_REGEX is a valid regex pattern")
});

static RULE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-_=]{3,}\s*$").expect("RULE_REGEX is a valid regex pattern"));

static SPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("SPACE_RUN_REGEX is a valid regex pattern"));

/// Normalizes text extracted from a document.
///
/// Drops page numbers, `Page N` footers and horizontal rules, keeps at
/// most one blank line between paragraphs, squeezes runs of spaces and
/// trims the result. Running it on its own output changes nothing.
pub fn clean_text(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in raw.lines() {
        if is_page_marker(line) || is_rule(line) {
            continue;
        }

        if line.trim().is_empty() {
            if previous_blank {
                continue;
            }
            previous_blank = true;
            lines.push("");
        } else {
            previous_blank = false;
            lines.push(line);
        }
    }

    let joined = lines.join("\n");
    SPACE_RUN_REGEX
        .replace_all(&joined, " ")
        .trim()
        .to_string()
}

fn is_page_marker(line: &str) -> bool {
    PAGE_NUMBER_REGEX.is_match(line) || PAGE_LABEL_REGEX.is_match(line)
}

fn is_rule(line: &str) -> bool {
    RULE_REGEX.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_bare_page_numbers() {
        let raw = "Intro paragraph\n12\nNext paragraph\n  13  \nEnd";
        assert_eq!(clean_text(raw), "Intro paragraph\nNext paragraph\nEnd");
    }

    #[test]
    fn test_removes_page_labels_case_insensitively() {
        let raw = "First\nPage 4\nSecond\nPAGE 5 of 20\nthird\npage   6";
        assert_eq!(clean_text(raw), "First\nSecond\nthird");
    }

    #[test]
    fn test_keeps_page_references_inside_sentences() {
        let raw = "See Page 4 for the diagram.";
        assert_eq!(clean_text(raw), "See Page 4 for the diagram.");
    }

    #[test]
    fn test_removes_horizontal_rules() {
        let raw = "Header\n-----\nBody\n_____\nMore\n=-=-=\nEnd\n--";
        assert_eq!(clean_text(raw), "Header\nBody\nMore\nEnd\n--");
    }

    #[test]
    fn test_collapses_blank_line_runs_to_one() {
        let raw = "Para one\n\n\n\n   \nPara two\n\nPara three";
        assert_eq!(clean_text(raw), "Para one\n\nPara two\n\nPara three");
    }

    #[test]
    fn test_collapses_space_runs_and_trims() {
        let raw = "   \n\nThe    quick  brown fox   \n\n";
        assert_eq!(clean_text(raw), "The quick brown fox");
    }

    #[test]
    fn test_removing_a_line_between_blanks_does_not_leave_two_blanks() {
        let raw = "Above\n\n7\n\nBelow";
        assert_eq!(clean_text(raw), "Above\n\nBelow");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let raw = "TITLE\n\n\n1\nSome   text here.\n----\n\n\nPage 2\nMore text.";
        let once = clean_text(raw);
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_empty_string() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\n \t\n"), "");
    }
}
