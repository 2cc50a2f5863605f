use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single recipe record as stored in a collection file.
///
/// Only `id` and `ingredients` are meaningful to the deduplication engine.
/// Every other field is captured verbatim in `extra` and written back
/// unchanged, so collections carrying arbitrary extra data can run through
/// the engine without losing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Collection-unique identifier. Collections in the wild carry both
    /// numeric and string ids, so the value is kept opaque and never
    /// validated; ordering decisions use the record's position in the
    /// batch, never the id.
    #[serde(default)]
    pub id: Value,
    /// Ordered ingredient names. A record with a missing or null
    /// `ingredients` field is treated as having none.
    #[serde(default, deserialize_with = "ingredients_or_empty")]
    pub ingredients: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: impl Into<Value>, ingredients: Vec<String>) -> Self {
        Recipe {
            id: id.into(),
            ingredients,
            extra: Map::new(),
        }
    }
}

fn ingredients_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ingredients = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(ingredients.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_ingredients_field_is_empty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 1,
            "title": "Plain Toast"
        }))
        .unwrap();

        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.extra.get("title").unwrap(), "Plain Toast");
    }

    #[test]
    fn test_null_ingredients_field_is_empty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "abc",
            "ingredients": null
        }))
        .unwrap();

        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_missing_id_defaults_to_null() {
        let recipe: Recipe = serde_json::from_value(json!({
            "ingredients": ["salt"]
        }))
        .unwrap();

        assert!(recipe.id.is_null());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let input = json!({
            "id": 42,
            "ingredients": ["salt"],
            "title": "Soup",
            "servings": 4,
            "tags": ["quick", "vegan"]
        });

        let recipe: Recipe = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(&recipe).unwrap();

        assert_eq!(output.get("title"), input.get("title"));
        assert_eq!(output.get("servings"), input.get("servings"));
        assert_eq!(output.get("tags"), input.get("tags"));
    }
}
