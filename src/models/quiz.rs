//! Quiz models.

use serde::{Deserialize, Serialize};

/// Difficulty assigned to every extracted question.
pub const DEFAULT_DIFFICULTY: &str = "EASY";

/// A flattened quiz question derived from a food's embedded quiz entries.
///
/// Serialized with snake_case field names, as the quiz screen consumes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionRecord {
    /// `{food_slug}_{local_id_or_index}`
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Text of the correct option, empty when the answer letter is out of range.
    pub correct_answer: String,
    /// Zero-based option index decoded from the answer letter. May be out of range.
    pub correct_index: i32,
    /// Capitalized category name, e.g. "Fruits".
    pub category: String,
    pub difficulty: String,
    pub explanation: String,
}

impl QuestionRecord {
    /// Whether the decoded index points at an existing option.
    pub fn has_valid_answer(&self) -> bool {
        usize::try_from(self.correct_index)
            .map(|idx| idx < self.options.len())
            .unwrap_or(false)
    }
}

/// Request body for grading quiz answers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeQuizRequest {
    pub answers: Vec<SubmittedAnswer>,
}

/// One answer picked by the child.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub selected_index: i32,
}

/// Grading outcome for a single answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedAnswer {
    pub question_id: String,
    pub selected_index: i32,
    pub correct: bool,
    pub correct_index: i32,
    pub correct_answer: String,
    pub explanation: String,
}

/// Result of grading a quiz round.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub graded: Vec<GradedAnswer>,
    pub unknown_ids: Vec<String>,
    pub correct_count: usize,
    pub total: usize,
    pub score_percent: f64,
}
