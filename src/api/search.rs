//! Search API endpoints.

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::FoodRecord;
use crate::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search query string.
    pub q: Option<String>,
    /// Maximum number of results (default: 20).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Offset for pagination (default: 0).
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    20
}

/// Search results with paging metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<FoodRecord>,
    /// Number of matches before paging.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Maximum number of search results allowed.
const MAX_SEARCH_LIMIT: usize = 100;

/// GET /api/search - Search foods by name, benefit, vitamin or mineral.
pub async fn search_foods(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<SearchResponse> {
    let Query(params) = params?;
    let Some(query) = params.q else {
        return Err(AppError::BadRequest(
            "Missing search query parameter `q`".to_string(),
        ));
    };

    // Limit the maximum number of results
    let limit = params.limit.min(MAX_SEARCH_LIMIT);

    let matches = state.catalog.search_foods(&query);
    let total = matches.len();
    let results = matches
        .into_iter()
        .skip(params.offset)
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(query = %query, total, "Food search");

    success(SearchResponse {
        results,
        total,
        limit,
        offset: params.offset,
    })
}
