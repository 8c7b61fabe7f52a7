use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::domain::question::Difficulty;

pub const DEFAULT_NUM_QUESTIONS: u32 = 10;
pub const DEFAULT_DISTRACTOR_TYPE: &str = "exam-style";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Saq,
    #[default]
    Mixed,
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mcq" => Ok(QuestionType::Mcq),
            "saq" => Ok(QuestionType::Saq),
            "mixed" => Ok(QuestionType::Mixed),
            other => Err(format!("unknown question_type '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStyle {
    Keywords,
    #[default]
    Full,
}

impl AnswerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerStyle::Keywords => "keywords",
            AnswerStyle::Full => "full",
        }
    }
}

impl FromStr for AnswerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keywords" => Ok(AnswerStyle::Keywords),
            "full" => Ok(AnswerStyle::Full),
            other => Err(format!("unknown saq_answer_style '{other}'")),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Fully resolved quiz preferences. Request payloads are turned into this
/// at the HTTP boundary, so the composer never sees a missing option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizPreferences {
    pub question_type: QuestionType,
    pub num_questions: u32,
    pub difficulty: Difficulty,
    pub mcq_distractor_type: String,
    pub saq_answer_style: AnswerStyle,
    pub include_hints: bool,
    pub include_section_refs: bool,
}

impl Default for QuizPreferences {
    fn default() -> Self {
        Self {
            question_type: QuestionType::default(),
            num_questions: DEFAULT_NUM_QUESTIONS,
            difficulty: Difficulty::default(),
            mcq_distractor_type: DEFAULT_DISTRACTOR_TYPE.to_string(),
            saq_answer_style: AnswerStyle::default(),
            include_hints: true,
            include_section_refs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let prefs = QuizPreferences::default();

        assert_eq!(prefs.question_type, QuestionType::Mixed);
        assert_eq!(prefs.num_questions, 10);
        assert_eq!(prefs.difficulty, Difficulty::Medium);
        assert_eq!(prefs.mcq_distractor_type, "exam-style");
        assert_eq!(prefs.saq_answer_style, AnswerStyle::Full);
        assert!(prefs.include_hints);
        assert!(prefs.include_section_refs);
    }

    #[test]
    fn test_enum_parsing_is_case_insensitive_and_strict() {
        assert_eq!("MCQ".parse::<QuestionType>(), Ok(QuestionType::Mcq));
        assert_eq!(" saq ".parse::<QuestionType>(), Ok(QuestionType::Saq));
        assert!("essay".parse::<QuestionType>().is_err());
        assert_eq!("Keywords".parse::<AnswerStyle>(), Ok(AnswerStyle::Keywords));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}
