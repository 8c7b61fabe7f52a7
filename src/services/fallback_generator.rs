//! Rule-based question generation used whenever the generative backend
//! fails or returns something unusable. Output depends only on the input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    models::domain::{Difficulty, McqQuestion, QuizPreferences, SaqQuestion, Segment},
    text::segmenter::MAIN_CONTENT_HEADING,
};

const MIN_SENTENCE_CHARS: usize = 40;
const MAX_SENTENCE_CHARS: usize = 200;
/// Sentences need more words than this to be turned into a cloze question.
const MIN_CLOZE_WORDS: usize = 5;
const CLOZE_BLANK: &str = "______";
const PLACEHOLDER_DISTRACTORS: [&str; 3] = ["Option B", "Option C", "Option D"];
const MCQ_HINT: &str = "Think about the context";

const SAQ_MODEL_ANSWER_CHARS: usize = 300;
const SAQ_KEYWORDS: [&str; 3] = ["concept", "definition", "example"];
const SAQ_MARKING_POINTS: [&str; 3] = ["Explanation", "Understanding", "Application"];
const SAQ_HINT: &str = "Consider the main ideas discussed";
const SAQ_MAX_MARKS: u32 = 5;

static SENTENCE_BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_BREAK_REGEX is a valid regex pattern"));

/// Builds up to `count` cloze questions from sentences of `text`.
///
/// The blanked word is always the first option. Fewer than `count`
/// questions come back when the text has too few usable sentences.
pub fn fallback_mcqs(
    text: &str,
    count: usize,
    segments: &[Segment],
    preferences: &QuizPreferences,
) -> Vec<McqQuestion> {
    let section_reference = match segments.first() {
        Some(segment) => segment.heading.clone(),
        None => Some(MAIN_CONTENT_HEADING.to_string()),
    };

    SENTENCE_BREAK_REGEX
        .split(text)
        .map(str::trim)
        .filter(|sentence| {
            let chars = sentence.chars().count();
            chars > MIN_SENTENCE_CHARS && chars < MAX_SENTENCE_CHARS
        })
        .take(count)
        .filter_map(|sentence| cloze_question(sentence, section_reference.clone(), preferences))
        .collect()
}

fn cloze_question(
    sentence: &str,
    section_reference: Option<String>,
    preferences: &QuizPreferences,
) -> Option<McqQuestion> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= MIN_CLOZE_WORDS {
        return None;
    }

    let blank_position = words.len() / 2;
    let answer = words[blank_position].to_string();
    let question = words
        .iter()
        .enumerate()
        .map(|(i, word)| if i == blank_position { CLOZE_BLANK } else { *word })
        .collect::<Vec<_>>()
        .join(" ");

    let [b, c, d] = PLACEHOLDER_DISTRACTORS;
    Some(McqQuestion {
        question,
        explanation: format!("The correct word is \"{answer}\""),
        options: [answer, b.to_string(), c.to_string(), d.to_string()],
        correct_index: 0,
        hint: preferences
            .include_hints
            .then(|| MCQ_HINT.to_string()),
        section_reference: section_reference.filter(|_| preferences.include_section_refs),
        difficulty: Difficulty::Medium,
    })
}

/// One comprehension question per segment, for the first `count` segments.
pub fn fallback_saqs(
    count: usize,
    segments: &[Segment],
    preferences: &QuizPreferences,
) -> Vec<SaqQuestion> {
    segments
        .iter()
        .take(count)
        .map(|segment| {
            let topic = segment.heading.as_deref().unwrap_or("this section");
            SaqQuestion {
                question: format!("Explain the key concepts covered in: {topic}"),
                model_answer: segment.content.chars().take(SAQ_MODEL_ANSWER_CHARS).collect(),
                keywords: SAQ_KEYWORDS.iter().map(|k| k.to_string()).collect(),
                marking_points: SAQ_MARKING_POINTS.iter().map(|p| p.to_string()).collect(),
                hint: preferences.include_hints.then(|| SAQ_HINT.to_string()),
                section_reference: segment
                    .heading
                    .clone()
                    .filter(|_| preferences.include_section_refs),
                difficulty: Difficulty::Medium,
                max_marks: SAQ_MAX_MARKS,
            }
        })
        .collect()
}
