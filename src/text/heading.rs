use once_cell::sync::Lazy;
use regex::Regex;

/// Lines at or above this many characters are never title-case headings.
const MAX_TITLE_CASE_HEADING_CHARS: usize = 80;

static NUMBERED_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.").expect("NUMBERED_HEADING_REGEX is a valid regex pattern")
});

static ALL_CAPS_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z\s]+$").expect("ALL_CAPS_HEADING_REGEX is a valid regex pattern")
});

static CHAPTER_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Chapter|Section)\s+\d+")
        .expect("CHAPTER_HEADING_REGEX is a valid regex pattern")
});

static ROMAN_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[IVX]+\.").expect("ROMAN_HEADING_REGEX is a valid regex pattern")
});

/// Decides whether a single line of cleaned text reads as a section heading.
///
/// Extracted text carries no markup, so this is purely lexical. A false
/// positive only splits a segment in two; it never drops text.
pub fn is_heading(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }

    if NUMBERED_HEADING_REGEX.is_match(line)
        || ALL_CAPS_HEADING_REGEX.is_match(line)
        || CHAPTER_HEADING_REGEX.is_match(line)
        || ROMAN_HEADING_REGEX.is_match(line)
    {
        return true;
    }

    looks_like_title_case(line)
}

fn looks_like_title_case(line: &str) -> bool {
    if line.chars().count() >= MAX_TITLE_CASE_HEADING_CHARS {
        return false;
    }

    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper || line.ends_with(['.', ',', ';']) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }

    let capitalized = words
        .iter()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .count();

    capitalized * 2 > words.len()
}
