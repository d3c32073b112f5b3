//! In-memory food catalog store.
//!
//! Read-only after construction. Every scan walks categories in `CategoryKey::ALL`
//! order, then foods in document order.

use std::collections::HashSet;

use serde_json::Value;

use super::{categories_object, category_foods};
use crate::errors::AppError;
use crate::models::{CategoryKey, FoodRecord};

/// Food catalog grouped by category.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    shelves: Vec<(CategoryKey, Vec<FoodRecord>)>,
}

impl FoodCatalog {
    /// Build the catalog from a parsed food document.
    ///
    /// Only a document without a `categories` object is an error. Food entries
    /// that cannot be read are logged and skipped.
    pub fn from_source(doc: &Value) -> Result<Self, AppError> {
        categories_object(doc)?;

        let mut shelves = Vec::with_capacity(CategoryKey::ALL.len());
        let mut seen = HashSet::new();

        for key in CategoryKey::ALL {
            let mut foods = Vec::new();
            if let Some(entries) = category_foods(doc, key) {
                for (slug, raw) in entries {
                    let Some(food) = parse_food(key, slug, raw) else {
                        continue;
                    };
                    if !seen.insert(food.id.clone()) {
                        tracing::warn!(
                            food_id = %food.id,
                            category = key.as_str(),
                            "Duplicate food id; lookups return the first occurrence"
                        );
                    }
                    foods.push(food);
                }
            }
            shelves.push((key, foods));
        }

        Ok(Self { shelves })
    }

    /// Find a food by id. The first match in category order wins.
    pub fn get_food_by_id(&self, id: &str) -> Option<&FoodRecord> {
        self.all_foods().find(|food| food.id == id)
    }

    /// Foods of a category. Unknown category keys give an empty list.
    pub fn get_foods_by_category(&self, category: &str) -> &[FoodRecord] {
        CategoryKey::from_str(category)
            .map(|key| self.shelf(key))
            .unwrap_or(&[])
    }

    /// Foods whose minimum recommended age is at most `age_in_months`.
    ///
    /// Foods without a leading number in `age_recommended` are never eligible.
    pub fn get_foods_by_age(&self, age_in_months: u32) -> Vec<&FoodRecord> {
        self.all_foods()
            .filter(|food| {
                food.min_age_months()
                    .is_some_and(|min_age| min_age <= age_in_months)
            })
            .collect()
    }

    /// Case-insensitive substring search over name, benefits, vitamins and minerals.
    ///
    /// Category names are not matched. Results keep catalog order; a blank query
    /// matches nothing.
    pub fn search_foods(&self, query: &str) -> Vec<&FoodRecord> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.all_foods()
            .filter(|food| matches_query(food, &needle))
            .collect()
    }

    /// Foods stored for a category key.
    pub fn shelf(&self, key: CategoryKey) -> &[FoodRecord] {
        self.shelves
            .iter()
            .find(|(shelf_key, _)| *shelf_key == key)
            .map(|(_, foods)| foods.as_slice())
            .unwrap_or(&[])
    }

    /// All foods, category by category.
    pub fn all_foods(&self) -> impl Iterator<Item = &FoodRecord> {
        self.shelves.iter().flat_map(|(_, foods)| foods.iter())
    }

    pub fn len(&self) -> usize {
        self.shelves.iter().map(|(_, foods)| foods.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches_query(food: &FoodRecord, needle: &str) -> bool {
    let contains = |text: &String| text.to_lowercase().contains(needle);

    contains(&food.name)
        || food.benefits.iter().any(contains)
        || food.nutrients.vitamins.iter().any(contains)
        || food.nutrients.minerals.iter().any(contains)
}

/// Deserialize one food entry, forcing its category to the bucket it lives in
/// and falling back to the map key for a missing id or name.
///
/// Returns `None` (with a warning) when the entry cannot be read.
fn parse_food(key: CategoryKey, slug: &str, raw: &Value) -> Option<FoodRecord> {
    let Some(fields) = raw.as_object() else {
        tracing::warn!(
            food = %format!("{}/{}", key.as_str(), slug),
            "Skipping food entry that is not an object"
        );
        return None;
    };
    let mut fields = fields.clone();

    if let Some(declared) = fields.get("category").and_then(Value::as_str) {
        if CategoryKey::from_str(declared) != Some(key) {
            tracing::warn!(
                food = slug,
                declared,
                bucket = key.as_str(),
                "Food declares another category; using the bucket it is stored in"
            );
        }
    }
    fields.insert("category".to_string(), Value::from(key.as_str()));

    for field in ["id", "name"] {
        let present = fields
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|value| !value.is_empty());
        if !present {
            fields.insert(field.to_string(), Value::from(slug));
        }
    }

    match serde_json::from_value(Value::Object(fields)) {
        Ok(food) => Some(food),
        Err(e) => {
            tracing::warn!(
                food = %format!("{}/{}", key.as_str(), slug),
                error = %e,
                "Skipping unreadable food entry"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn food(name: &str, age: &str, vitamins: &[&str], minerals: &[&str], benefits: &[&str]) -> Value {
        json!({
            "name": name,
            "nutrients": {
                "calories": 50,
                "vitamins": vitamins,
                "minerals": minerals
            },
            "benefits": benefits,
            "allergens": [],
            "ageRecommended": age
        })
    }

    fn fixture() -> FoodCatalog {
        let doc = json!({
            "categories": {
                "fruits": { "foods": {
                    "banana": food("Banana", "6+ months", &["B6"], &["Potassium"], &["Quick energy"]),
                    "apple": food("Apple", "6+ months", &["C"], &[], &["Healthy digestion"]),
                    "kiwi": food("Kiwi", "12+ months", &["C"], &[], &["Fights colds"])
                }},
                "vegetables": { "foods": {
                    "carrot": food("Carrot", "6+ months", &["A"], &["POTASSIUM"], &["Good eyesight"]),
                    "mystery-greens": food("Mystery Greens", "when ready", &["K"], &[], &[])
                }},
                "fats": { "foods": {
                    "peanut-butter": food("Peanut Butter", "24+ months", &["E"], &["Magnesium"], &["Energy"])
                }},
                "dairy": { "foods": {
                    "yogurt": food("Yogurt", "6+ months", &["B12"], &["Calcium"], &["Happy tummy, rich in potassium"])
                }}
            }
        });
        FoodCatalog::from_source(&doc).unwrap()
    }

    fn ids(foods: &[&FoodRecord]) -> Vec<String> {
        foods.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn test_get_food_by_id() {
        let catalog = fixture();
        for food in catalog.all_foods() {
            assert_eq!(catalog.get_food_by_id(&food.id).unwrap().id, food.id);
        }
        assert!(catalog.get_food_by_id("dragonfruit").is_none());
        assert!(catalog.get_food_by_id("").is_none());
    }

    #[test]
    fn test_get_foods_by_category() {
        let catalog = fixture();
        for key in CategoryKey::ALL {
            for food in catalog.get_foods_by_category(key.as_str()) {
                assert_eq!(food.category, key);
            }
        }

        let fruits: Vec<&str> = catalog
            .get_foods_by_category("fruits")
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(fruits, vec!["banana", "apple", "kiwi"]);

        assert!(catalog.get_foods_by_category("proteins").is_empty());
        assert!(catalog.get_foods_by_category("sweets").is_empty());
        assert!(catalog.get_foods_by_category("Fruits").is_empty());
    }

    #[test]
    fn test_get_foods_by_age() {
        let catalog = fixture();
        let eligible = ids(&catalog.get_foods_by_age(12));
        assert!(eligible.contains(&"apple".to_string()));
        assert!(eligible.contains(&"kiwi".to_string()));
        assert!(!eligible.contains(&"peanut-butter".to_string()));
        assert!(!eligible.contains(&"mystery-greens".to_string()));

        assert_eq!(
            ids(&catalog.get_foods_by_age(6)),
            vec!["banana", "apple", "carrot", "yogurt"]
        );
        assert!(catalog.get_foods_by_age(5).is_empty());
        assert_eq!(catalog.get_foods_by_age(24).len(), 6);
    }

    #[test]
    fn test_search_foods() {
        let catalog = fixture();

        // Minerals in any case, plus a benefit that mentions the term.
        assert_eq!(
            ids(&catalog.search_foods("potassium")),
            vec!["banana", "carrot", "yogurt"]
        );
        assert_eq!(ids(&catalog.search_foods("APPLE")), vec!["apple"]);
        assert_eq!(ids(&catalog.search_foods("colds")), vec!["kiwi"]);
        assert_eq!(ids(&catalog.search_foods("b12")), vec!["yogurt"]);
    }

    #[test]
    fn test_search_ignores_category_and_blank_queries() {
        let catalog = fixture();
        assert!(catalog.search_foods("fruits").is_empty());
        assert!(catalog.search_foods("").is_empty());
        assert!(catalog.search_foods("   ").is_empty());
        assert!(catalog.search_foods("chocolate").is_empty());
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let doc = json!({
            "categories": {
                "fruits": { "foods": { "berry": { "id": "berry", "name": "Fruit Berry" } } },
                "vegetables": { "foods": { "berry2": { "id": "berry", "name": "Veg Berry" } } }
            }
        });
        let catalog = FoodCatalog::from_source(&doc).unwrap();
        assert_eq!(catalog.len(), 2);
        let found = catalog.get_food_by_id("berry").unwrap();
        assert_eq!(found.name, "Fruit Berry");
        assert_eq!(found.category, CategoryKey::Fruits);
    }

    #[test]
    fn test_missing_id_and_mismatched_category() {
        let doc = json!({
            "categories": {
                "carbohydrates": { "foods": {
                    "rice": { "name": "Rice", "category": "grains/carbohydrates" }
                }}
            }
        });
        let catalog = FoodCatalog::from_source(&doc).unwrap();
        let rice = catalog.get_food_by_id("rice").unwrap();
        assert_eq!(rice.category, CategoryKey::Carbohydrates);
        assert!(rice.benefits.is_empty());
        assert_eq!(rice.nutrients.calories, 0.0);
        assert_eq!(catalog.get_foods_by_category("grains").len(), 1);
    }

    #[test]
    fn test_document_without_categories_is_rejected() {
        assert!(matches!(
            FoodCatalog::from_source(&json!({ "foods": {} })),
            Err(AppError::Catalog(_))
        ));
        assert!(matches!(
            FoodCatalog::from_source(&json!({ "categories": [] })),
            Err(AppError::Catalog(_))
        ));
    }

    #[test]
    fn test_bad_entries_do_not_break_siblings() {
        let doc = json!({
            "categories": { "fruits": { "foods": {
                "apple": {
                    "name": "Apple",
                    "ageRecommended": "6+ months",
                    "quiz": [{ "question": "Color?", "options": ["Red", "Blue", "Pink", "Gray"], "correct_answer": "A" }]
                },
                "pear": { "name": "Pear", "allergens": null, "benefits": null },
                "fig": { "ageRecommended": "8+ months" },
                "plum": { "name": "Plum", "nutrients": { "calories": "lots" } },
                "grape": "not an object",
                "kiwi": { "name": "Kiwi", "benefits": ["Fights colds"] }
            }}}
        });

        let catalog = FoodCatalog::from_source(&doc).unwrap();
        let fruits: Vec<&str> = catalog
            .get_foods_by_category("fruits")
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(fruits, vec!["apple", "pear", "fig", "kiwi"]);

        let pear = catalog.get_food_by_id("pear").unwrap();
        assert!(pear.allergens.is_empty());
        assert!(pear.benefits.is_empty());
        assert_eq!(catalog.get_food_by_id("fig").unwrap().name, "fig");
        assert!(catalog.get_food_by_id("plum").is_none());
        assert_eq!(ids(&catalog.search_foods("colds")), vec!["kiwi"]);

        let quizzes = crate::quiz::QuizBank::from_source(&doc);
        assert_eq!(quizzes.all().len(), 1);
        assert_eq!(quizzes.all()[0].id, "apple_0");
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let doc = crate::catalog::parse_source(crate::catalog::BUNDLED_CATALOG).unwrap();
        let catalog = FoodCatalog::from_source(&doc).unwrap();
        for key in CategoryKey::ALL {
            assert!(!catalog.shelf(key).is_empty(), "{} is empty", key.as_str());
        }
        assert!(catalog.get_food_by_id("apple").is_some());
    }
}
