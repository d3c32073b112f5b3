//! Meal summary endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{MealSummary, MealSummaryRequest};
use crate::nutrition::summarize_meal;
use crate::AppState;

/// POST /api/meals/summary - Nutrient totals and calorie progress for a meal draft.
pub async fn summarize_meal_draft(
    State(state): State<AppState>,
    request: Result<Json<MealSummaryRequest>, JsonRejection>,
) -> ApiResult<MealSummary> {
    let Json(request) = request?;
    if request.food_ids.is_empty() {
        return Err(AppError::Validation("No foods selected".to_string()));
    }

    let calorie_target = request.calorie_target.unwrap_or(state.config.daily_calories);
    if !calorie_target.is_finite() || calorie_target <= 0.0 {
        return Err(AppError::Validation(
            "calorieTarget must be a positive number".to_string(),
        ));
    }

    success(summarize_meal(&state.catalog, &request.food_ids, calorie_target))
}
