//! Food catalog module.
//!
//! The food document is the source of truth for catalog and quiz data. It is read
//! once at startup and never mutated.

mod store;

pub use store::*;

use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::CategoryKey;

/// Food document compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/foods.json");

/// Load the food document, from disk when a path is configured.
pub async fn load_source(path: Option<&Path>) -> Result<Value, AppError> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => BUNDLED_CATALOG.to_string(),
    };
    parse_source(&raw)
}

/// Parse a food document and check its top-level shape.
pub fn parse_source(raw: &str) -> Result<Value, AppError> {
    let doc: Value = serde_json::from_str(raw)?;
    categories_object(&doc)?;
    Ok(doc)
}

/// The top-level `categories` object of a food document.
pub(crate) fn categories_object(doc: &Value) -> Result<&Map<String, Value>, AppError> {
    doc.get("categories")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            AppError::Catalog("Food document must contain a `categories` object".to_string())
        })
}

/// Foods of one category in document order, keyed by slug.
///
/// Carbohydrates may also be stored under the legacy `grains` key.
pub(crate) fn category_foods(doc: &Value, key: CategoryKey) -> Option<&Map<String, Value>> {
    let categories = doc.get("categories")?;
    let bucket = match key {
        CategoryKey::Carbohydrates => categories
            .get(key.as_str())
            .or_else(|| categories.get("grains"))?,
        _ => categories.get(key.as_str())?,
    };
    bucket.get("foods")?.as_object()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_source_requires_categories() {
        assert!(parse_source(r#"{"categories": {}}"#).is_ok());
        assert!(matches!(parse_source(r#"{"foods": {}}"#), Err(AppError::Catalog(_))));
        assert!(matches!(parse_source(r#"{"categories": []}"#), Err(AppError::Catalog(_))));
        assert!(matches!(parse_source("not json"), Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_category_foods_grains_fallback() {
        let doc = json!({
            "categories": {
                "grains": { "foods": { "oats": { "name": "Oats" } } }
            }
        });
        let foods = category_foods(&doc, CategoryKey::Carbohydrates).unwrap();
        assert!(foods.contains_key("oats"));
        assert!(category_foods(&doc, CategoryKey::Fruits).is_none());
    }

    #[tokio::test]
    async fn test_load_bundled_and_from_disk() {
        let bundled = load_source(None).await.unwrap();
        assert!(category_foods(&bundled, CategoryKey::Fruits).is_some());

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("foods.json");
        std::fs::write(&path, r#"{"categories": {"dairy": {"foods": {}}}}"#).unwrap();
        let doc = load_source(Some(&path)).await.unwrap();
        assert!(category_foods(&doc, CategoryKey::Dairy).unwrap().is_empty());

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_source(Some(&missing)).await,
            Err(AppError::Catalog(_))
        ));
    }
}
