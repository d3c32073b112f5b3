//! Food API endpoints.

use axum::extract::{rejection::QueryRejection, Path, Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::FoodRecord;
use crate::AppState;

/// Food listing query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodsQuery {
    /// Only foods suitable for a child of this age.
    #[serde(default)]
    pub age_in_months: Option<u32>,
}

/// GET /api/foods - List all foods, optionally filtered by age.
pub async fn list_foods(
    State(state): State<AppState>,
    params: Result<Query<FoodsQuery>, QueryRejection>,
) -> ApiResult<Vec<FoodRecord>> {
    let Query(params) = params?;
    let foods: Vec<FoodRecord> = match params.age_in_months {
        Some(age) => state
            .catalog
            .get_foods_by_age(age)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.all_foods().cloned().collect(),
    };
    success(foods)
}

/// GET /api/foods/{id} - Get a single food.
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<FoodRecord> {
    match state.catalog.get_food_by_id(&id) {
        Some(food) => success(food.clone()),
        None => Err(AppError::NotFound(format!("Food {} not found", id))),
    }
}

/// GET /api/categories/{category}/foods - Foods of a category. Unknown categories are empty.
pub async fn list_category_foods(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Vec<FoodRecord>> {
    success(state.catalog.get_foods_by_category(&category).to_vec())
}
