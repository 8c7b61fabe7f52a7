use schemars::schema_for;
use serde_json::{json, Value};

use crate::{
    constants::prompts::{
        ANSWER_EVALUATOR_SYSTEM_PROMPT, CONTENT_EXCERPT_CHARS, EVALUATION_TEMPERATURE,
        GENERATION_TEMPERATURE, MCQ_REQUIREMENTS, OUTPUT_INSTRUCTIONS,
        QUIZ_GENERATOR_SYSTEM_PROMPT, SAQ_REQUIREMENTS,
    },
    models::{
        domain::{evaluation::QualitativeAssessment, AnswerStyle, QuizPreferences},
        dto::generation::{GeneratedMcqBatch, GeneratedSaqBatch},
    },
    services::model_service::ChatRequest,
};

/// The first [`CONTENT_EXCERPT_CHARS`] characters of `text`.
pub fn content_excerpt(text: &str) -> &str {
    match text.char_indices().nth(CONTENT_EXCERPT_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn mcq_generation_request(text: &str, count: usize, preferences: &QuizPreferences) -> ChatRequest {
    let example = json!({
        "questions": [{
            "type": "mcq",
            "question": "Question text?",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": 0,
            "explanation": "Brief explanation of why this is correct",
            "hint": "Optional hint",
            "section_reference": "Section number or topic",
            "difficulty": preferences.difficulty.as_str()
        }]
    });
    let schema = schema_for!(GeneratedMcqBatch);

    let user = format!(
        "Based on the following educational content, create {count} multiple-choice questions (MCQs).

CONTENT:
{content}

REQUIREMENTS:
- Difficulty level: {difficulty}
- Distractor type: {distractor}
- {hints}
- {section_refs}
{MCQ_REQUIREMENTS}

OUTPUT FORMAT (JSON):
{example:#}

JSON SCHEMA:
{schema:#}

Generate {count} questions in this exact format. {OUTPUT_INSTRUCTIONS}",
        content = content_excerpt(text),
        difficulty = preferences.difficulty,
        distractor = preferences.mcq_distractor_type,
        hints = hint_instruction(preferences),
        section_refs = section_ref_instruction(preferences),
        schema = schema.as_value(),
    );

    ChatRequest {
        system: QUIZ_GENERATOR_SYSTEM_PROMPT.to_string(),
        user,
        temperature: GENERATION_TEMPERATURE,
    }
}

pub fn saq_generation_request(text: &str, count: usize, preferences: &QuizPreferences) -> ChatRequest {
    let example = json!({
        "questions": [{
            "type": "saq",
            "question": "Question text?",
            "model_answer": "Complete model answer with all key points",
            "keywords": ["keyword1", "keyword2", "keyword3"],
            "marking_points": ["Point 1", "Point 2", "Point 3"],
            "hint": "Optional hint",
            "section_reference": "Section number or topic",
            "difficulty": preferences.difficulty.as_str(),
            "max_marks": 5
        }]
    });
    let schema = schema_for!(GeneratedSaqBatch);

    let style_note = match preferences.saq_answer_style {
        AnswerStyle::Full => "provide full model answers",
        AnswerStyle::Keywords => "provide keywords only",
    };

    let user = format!(
        "Based on the following educational content, create {count} short answer questions (SAQs).

CONTENT:
{content}

REQUIREMENTS:
- Difficulty level: {difficulty}
- Answer style: {style} ({style_note})
- {hints}
- {section_refs}
{SAQ_REQUIREMENTS}

OUTPUT FORMAT (JSON):
{example:#}

JSON SCHEMA:
{schema:#}

Generate {count} questions in this exact format. {OUTPUT_INSTRUCTIONS}",
        content = content_excerpt(text),
        difficulty = preferences.difficulty,
        style = preferences.saq_answer_style.as_str(),
        hints = hint_instruction(preferences),
        section_refs = section_ref_instruction(preferences),
        schema = schema.as_value(),
    );

    ChatRequest {
        system: QUIZ_GENERATOR_SYSTEM_PROMPT.to_string(),
        user,
        temperature: GENERATION_TEMPERATURE,
    }
}

pub fn evaluation_request(user_answer: &str, model_answer: &str, keywords: &[String]) -> ChatRequest {
    let example: Value = json!({
        "score_out_of_10": 8,
        "feedback": "Good understanding shown...",
        "strengths": ["Point 1", "Point 2"],
        "improvements": ["Missing X", "Could elaborate on Y"],
        "demonstrates_understanding": true
    });
    let schema = schema_for!(QualitativeAssessment);

    let user = format!(
        "Evaluate this student's answer compared to the model answer.

MODEL ANSWER:
{model_answer}

STUDENT'S ANSWER:
{user_answer}

KEYWORDS REQUIRED: {keywords}

Provide:
1. A score out of 10
2. Brief feedback on what was good
3. What was missing or could be improved
4. Whether the answer demonstrates understanding

Respond in JSON format:
{example:#}

JSON SCHEMA:
{schema:#}",
        keywords = keywords.join(", "),
        schema = schema.as_value(),
    );

    ChatRequest {
        system: ANSWER_EVALUATOR_SYSTEM_PROMPT.to_string(),
        user,
        temperature: EVALUATION_TEMPERATURE,
    }
}

fn hint_instruction(preferences: &QuizPreferences) -> &'static str {
    if preferences.include_hints {
        "Include a hint for each question"
    } else {
        "Do not include hints"
    }
}

fn section_ref_instruction(preferences: &QuizPreferences) -> &'static str {
    if preferences.include_section_refs {
        "Include section references if applicable"
    } else {
        "Do not include section references"
    }
}
