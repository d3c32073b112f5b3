//! Meal totals and display percentages.

use crate::catalog::FoodCatalog;
use crate::models::{FoodRecord, MealSummary, MealTotals};

/// `value` as a percentage of `target`, clamped to `0..=100`.
///
/// Returns 0 for a non-positive target or non-finite input.
pub fn percent(value: f64, target: f64) -> f64 {
    if !value.is_finite() || !target.is_finite() || target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).clamp(0.0, 100.0)
}

impl MealTotals {
    /// Sum the nutrients of the given foods.
    pub fn from_foods(foods: &[&FoodRecord]) -> Self {
        foods.iter().fold(MealTotals::default(), |mut totals, food| {
            totals.calories += food.nutrients.calories;
            totals.protein += food.nutrients.protein;
            totals.carbs += food.nutrients.carbs;
            totals.fiber += food.nutrients.fiber;
            totals.sugar += food.nutrients.sugar;
            totals.food_count += 1;
            totals
        })
    }
}

/// Summarize a meal draft against a daily calorie target.
///
/// Repeated ids count once per occurrence; unknown ids are listed in `missing`.
pub fn summarize_meal(catalog: &FoodCatalog, food_ids: &[String], calorie_target: f64) -> MealSummary {
    let mut found = Vec::with_capacity(food_ids.len());
    let mut missing = Vec::new();

    for id in food_ids {
        match catalog.get_food_by_id(id) {
            Some(food) => found.push(food),
            None => missing.push(id.clone()),
        }
    }

    let totals = MealTotals::from_foods(&found);
    let calorie_progress = percent(totals.calories, calorie_target);

    MealSummary {
        foods: found.iter().map(|food| food.id.clone()).collect(),
        missing,
        totals,
        calorie_target,
        calorie_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_source(&json!({
            "categories": {
                "fruits": { "foods": {
                    "banana": { "name": "Banana", "nutrients": { "calories": 89, "protein": 1.1, "carbs": 23, "fiber": 2.6, "sugar": 12 } }
                }},
                "dairy": { "foods": {
                    "yogurt": { "name": "Yogurt", "nutrients": { "calories": 61, "protein": 3.5, "carbs": 4.7, "sugar": 4.7 } }
                }}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(250.0, 1000.0), 25.0);
        assert_eq!(percent(1500.0, 1000.0), 100.0);
        assert_eq!(percent(-10.0, 1000.0), 0.0);
        assert_eq!(percent(10.0, 0.0), 0.0);
        assert_eq!(percent(10.0, -5.0), 0.0);
        assert_eq!(percent(f64::NAN, 100.0), 0.0);
        assert_eq!(percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_summarize_meal() {
        let catalog = catalog();
        let ids = vec![
            "banana".to_string(),
            "yogurt".to_string(),
            "banana".to_string(),
            "cake".to_string(),
        ];
        let summary = summarize_meal(&catalog, &ids, 1000.0);

        assert_eq!(summary.foods, vec!["banana", "yogurt", "banana"]);
        assert_eq!(summary.missing, vec!["cake"]);
        assert_eq!(summary.totals.food_count, 3);
        assert!((summary.totals.calories - 239.0).abs() < 1e-9);
        assert!((summary.totals.fiber - 5.2).abs() < 1e-9);
        assert!((summary.calorie_progress - 23.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_meal() {
        let summary = summarize_meal(&catalog(), &[], 1200.0);
        assert_eq!(summary.totals, MealTotals::default());
        assert_eq!(summary.calorie_progress, 0.0);
    }
}
