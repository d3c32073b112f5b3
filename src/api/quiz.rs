//! Quiz API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{GradeQuizRequest, QuestionRecord, QuizResult};
use crate::AppState;

/// GET /api/quiz/{bucket} - Questions of a category bucket or `all`.
pub async fn get_quiz_bucket(
    State(state): State<AppState>,
    Path(bucket): Path<String>,
) -> ApiResult<Vec<QuestionRecord>> {
    match state.quizzes.bucket(&bucket) {
        Some(questions) => success(questions.to_vec()),
        None => Err(AppError::NotFound(format!("Quiz bucket {} not found", bucket))),
    }
}

/// POST /api/quiz/answers - Grade a round of answers.
pub async fn grade_quiz(
    State(state): State<AppState>,
    request: Result<Json<GradeQuizRequest>, JsonRejection>,
) -> ApiResult<QuizResult> {
    let Json(request) = request?;
    if request.answers.is_empty() {
        return Err(AppError::Validation("No answers provided".to_string()));
    }

    let result = state.quizzes.grade(&request.answers);
    if !result.unknown_ids.is_empty() {
        tracing::warn!(unknown = ?result.unknown_ids, "Answers for unknown questions ignored");
    }

    success(result)
}
