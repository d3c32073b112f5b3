//! Meal draft models.

use serde::{Deserialize, Serialize};

/// Request body for summarizing a meal draft.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummaryRequest {
    /// Selected food ids. Repeats count as extra servings.
    pub food_ids: Vec<String>,
    /// Daily calorie target; the configured default applies when absent.
    #[serde(default)]
    pub calorie_target: Option<f64>,
}

/// Summed nutrients over the foods of a meal.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub food_count: usize,
}

/// Meal draft summary with calorie progress for the progress bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    pub foods: Vec<String>,
    pub missing: Vec<String>,
    pub totals: MealTotals,
    pub calorie_target: f64,
    pub calorie_progress: f64,
}
