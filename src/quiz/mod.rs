//! Quiz extraction and grading.
//!
//! Questions are embedded per food in the food document. They are flattened once at
//! startup into an ordered list (category order, then food order, then quiz order)
//! and partitioned into per-category buckets plus an `all` bucket.
//!
//! Malformed entries are kept with empty fields or an out-of-range answer index
//! instead of failing the whole extraction.

use serde_json::Value;

use crate::catalog::category_foods;
use crate::models::{
    CategoryKey, GradedAnswer, QuestionRecord, QuizResult, SubmittedAnswer, DEFAULT_DIFFICULTY,
};
use crate::nutrition::percent;

/// Name of the bucket holding every question.
pub const ALL_BUCKET: &str = "all";

/// Flatten every embedded quiz entry of the food document into question records.
pub fn extract_questions(doc: &Value) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();

    for key in CategoryKey::ALL {
        let Some(foods) = category_foods(doc, key) else {
            continue;
        };
        let category = key.display_name();

        for (slug, food) in foods {
            let Some(entries) = food.get("quiz").and_then(Value::as_array) else {
                continue;
            };
            for (index, entry) in entries.iter().enumerate() {
                let question = to_question(slug, index, entry, &category);
                if question.question.is_empty() || !question.has_valid_answer() {
                    tracing::debug!(
                        question_id = %question.id,
                        correct_index = question.correct_index,
                        "Degraded quiz entry kept"
                    );
                }
                questions.push(question);
            }
        }
    }

    questions
}

fn to_question(slug: &str, index: usize, entry: &Value, category: &str) -> QuestionRecord {
    let local_id = match entry.get("id") {
        None | Some(Value::Null) => index.to_string(),
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
    };

    let options: Vec<String> = entry
        .get("options")
        .and_then(Value::as_array)
        .map(|options| options.iter().map(text_of).collect())
        .unwrap_or_default();

    let letter = entry
        .get("correct_answer")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let correct_index = decode_answer_letter(letter);

    let correct_answer = usize::try_from(correct_index)
        .ok()
        .and_then(|idx| options.get(idx))
        .cloned()
        .unwrap_or_default();

    QuestionRecord {
        id: format!("{}_{}", slug, local_id),
        question: entry
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        options,
        correct_answer,
        correct_index,
        category: category.to_string(),
        difficulty: DEFAULT_DIFFICULTY.to_string(),
        explanation: entry
            .get("explanation")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Offset of the answer letter's first character from 'A'; -1 for an empty letter.
pub fn decode_answer_letter(letter: &str) -> i32 {
    letter
        .chars()
        .next()
        .map(|c| c as i32 - 'A' as i32)
        .unwrap_or(-1)
}

/// Extracted questions, flat and bucketed by category.
#[derive(Debug, Clone)]
pub struct QuizBank {
    all: Vec<QuestionRecord>,
    buckets: Vec<(CategoryKey, Vec<QuestionRecord>)>,
}

impl QuizBank {
    /// Extract and bucket the questions of a food document.
    pub fn from_source(doc: &Value) -> Self {
        Self::from_questions(extract_questions(doc))
    }

    /// Partition a flat question list by its capitalized category name.
    pub fn from_questions(all: Vec<QuestionRecord>) -> Self {
        let buckets = CategoryKey::ALL
            .iter()
            .map(|key| {
                let name = key.display_name();
                let questions = all
                    .iter()
                    .filter(|q| q.category == name)
                    .cloned()
                    .collect();
                (*key, questions)
            })
            .collect();

        Self { all, buckets }
    }

    pub fn all(&self) -> &[QuestionRecord] {
        &self.all
    }

    /// Questions of a bucket: `all` or a lowercase category key.
    pub fn bucket(&self, name: &str) -> Option<&[QuestionRecord]> {
        if name == ALL_BUCKET {
            return Some(&self.all);
        }
        self.buckets
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, questions)| questions.as_slice())
    }

    pub fn count_for(&self, key: CategoryKey) -> usize {
        self.bucket(key.as_str()).map_or(0, <[QuestionRecord]>::len)
    }

    pub fn find(&self, id: &str) -> Option<&QuestionRecord> {
        self.all.iter().find(|q| q.id == id)
    }

    /// Grade submitted answers. Unknown question ids are reported, not scored.
    pub fn grade(&self, answers: &[SubmittedAnswer]) -> QuizResult {
        let mut graded = Vec::with_capacity(answers.len());
        let mut unknown_ids = Vec::new();

        for answer in answers {
            let Some(question) = self.find(&answer.question_id) else {
                unknown_ids.push(answer.question_id.clone());
                continue;
            };
            graded.push(GradedAnswer {
                question_id: question.id.clone(),
                selected_index: answer.selected_index,
                correct: question.has_valid_answer()
                    && answer.selected_index == question.correct_index,
                correct_index: question.correct_index,
                correct_answer: question.correct_answer.clone(),
                explanation: question.explanation.clone(),
            });
        }

        let correct_count = graded.iter().filter(|g| g.correct).count();
        let total = graded.len();

        QuizResult {
            graded,
            unknown_ids,
            correct_count,
            total,
            score_percent: percent(correct_count as f64, total as f64),
        }
    }
}
