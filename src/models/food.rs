//! Food catalog models.

use serde::{Deserialize, Deserializer, Serialize};

/// Fixed food category enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Fruits,
    Vegetables,
    Proteins,
    #[serde(alias = "grains")]
    Carbohydrates,
    Dairy,
    Fats,
}

impl CategoryKey {
    /// Iteration order for every catalog scan and quiz extraction.
    /// Output ordering depends on it, so it must not follow map order.
    pub const ALL: [CategoryKey; 6] = [
        CategoryKey::Fruits,
        CategoryKey::Vegetables,
        CategoryKey::Proteins,
        CategoryKey::Carbohydrates,
        CategoryKey::Dairy,
        CategoryKey::Fats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Fruits => "fruits",
            CategoryKey::Vegetables => "vegetables",
            CategoryKey::Proteins => "proteins",
            CategoryKey::Carbohydrates => "carbohydrates",
            CategoryKey::Dairy => "dairy",
            CategoryKey::Fats => "fats",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fruits" => Some(CategoryKey::Fruits),
            "vegetables" => Some(CategoryKey::Vegetables),
            "proteins" => Some(CategoryKey::Proteins),
            "carbohydrates" | "grains" => Some(CategoryKey::Carbohydrates),
            "dairy" => Some(CategoryKey::Dairy),
            "fats" => Some(CategoryKey::Fats),
            _ => None,
        }
    }

    /// Human-readable name: the key with its first letter uppercased.
    pub fn display_name(&self) -> String {
        capitalize(self.as_str())
    }
}

/// Uppercase the first character and leave the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read a missing or `null` field as its default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-100g nutrient breakdown of a food.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Nutrients {
    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protein: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fiber: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sugar: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vitamins: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub minerals: Vec<String>,
}

/// A single food in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    /// Unique slug across the whole catalog. Filled from the map key when absent.
    #[serde(default)]
    pub id: String,
    /// Filled from the map key when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Always the category bucket the record was loaded from.
    pub category: CategoryKey,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrients: Nutrients,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allergens: Vec<String>,
    /// Minimum age, e.g. "6+ months".
    #[serde(default, deserialize_with = "null_as_default")]
    pub age_recommended: String,
}

impl FoodRecord {
    /// Minimum age in months: the leading digit run of `age_recommended`.
    ///
    /// Returns `None` when the string carries no leading digits.
    pub fn min_age_months(&self) -> Option<u32> {
        let trimmed = self.age_recommended.trim_start();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

/// Overview of one catalog category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub key: CategoryKey,
    pub name: String,
    pub food_count: usize,
    pub question_count: usize,
}

/// Catalog overview returned to the client home screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub categories: Vec<CategorySummary>,
    pub total_foods: usize,
    pub total_questions: usize,
    pub loaded_at: String,
}
