pub const QUIZ_GENERATOR_SYSTEM_PROMPT: &str =
    "You are an expert educational content creator specializing in quiz generation.";

pub const ANSWER_EVALUATOR_SYSTEM_PROMPT: &str =
    "You are an expert teacher evaluating student answers.";

/// Sampling temperature for question generation.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for answer evaluation; kept low so grading is stable.
pub const EVALUATION_TEMPERATURE: f32 = 0.3;

/// Characters of source text sent with each generation request. This is a
/// token budget, not a semantic boundary.
pub const CONTENT_EXCERPT_CHARS: usize = 4000;

pub const MCQ_REQUIREMENTS: &str = "- Each question should have 1 correct answer and 3 distractors (wrong answers)
- If the distractor type is 'exam-style' or 'traps', include plausible wrong answers that test common misconceptions
- The options array must contain exactly 4 strings and correct_answer must be the index (0-3) of the correct option";

pub const SAQ_REQUIREMENTS: &str = "- Each question should test understanding, not just memorization
- Identify 3-7 key keywords that must appear in a correct answer
- Provide marking points";

pub const OUTPUT_INSTRUCTIONS: &str = "Return ONLY a single JSON object with a \"questions\" array. Do not include markdown, code fences or commentary.";
