use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MCQ_OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqQuestion {
    pub question: String,
    pub options: [String; MCQ_OPTION_COUNT],
    #[serde(rename = "correct_answer")]
    pub correct_index: u8,
    pub explanation: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub section_reference: Option<String>,
    pub difficulty: Difficulty,
}

impl McqQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(usize::from(self.correct_index))
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SaqQuestion {
    pub question: String,
    pub model_answer: String,
    pub keywords: Vec<String>,
    pub marking_points: Vec<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub section_reference: Option<String>,
    pub difficulty: Difficulty,
    pub max_marks: u32,
}

/// A quiz item, tagged on the wire by `"type": "mcq" | "saq"`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Mcq(McqQuestion),
    Saq(SaqQuestion),
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::Mcq(q) => &q.question,
            Question::Saq(q) => &q.question,
        }
    }

    pub fn section_reference(&self) -> Option<&str> {
        match self {
            Question::Mcq(q) => q.section_reference.as_deref(),
            Question::Saq(q) => q.section_reference.as_deref(),
        }
    }

    pub fn is_mcq(&self) -> bool {
        matches!(self, Question::Mcq(_))
    }
}
