//! Catalog overview endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{CatalogInfo, CategoryKey, CategorySummary};
use crate::AppState;

/// GET /api/catalog - Category summaries and totals.
pub async fn get_catalog(State(state): State<AppState>) -> ApiResult<CatalogInfo> {
    let categories: Vec<CategorySummary> = CategoryKey::ALL
        .iter()
        .map(|key| CategorySummary {
            key: *key,
            name: key.display_name(),
            food_count: state.catalog.shelf(*key).len(),
            question_count: state.quizzes.count_for(*key),
        })
        .collect();

    success(CatalogInfo {
        categories,
        total_foods: state.catalog.len(),
        total_questions: state.quizzes.all().len(),
        loaded_at: state.loaded_at.to_rfc3339(),
    })
}
