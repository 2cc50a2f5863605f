use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::model::Recipe;

/// Positional identity of one appearance of an ingredient string.
///
/// `recipe_index` is the record's 0-based position in the input batch and is
/// the canonical ordering key; `recipe_id` is carried for display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub recipe_id: Value,
    pub recipe_index: usize,
}

/// Metadata for an ingredient that appears more than once in the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateInfo {
    pub total_occurrences: usize,
    /// Occurrences beyond the first, i.e. how many a dedup pass would drop.
    pub duplicate_count: usize,
    pub first_occurrence: Occurrence,
    /// Every occurrence in batch order, first one included.
    pub all_occurrences: Vec<Occurrence>,
}

/// Result of a read-only duplicate inventory over one batch.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateAnalysis {
    pub total_unique_ingredients: usize,
    /// Only ingredients with at least two occurrences appear here.
    pub duplicate_ingredients: HashMap<String, DuplicateInfo>,
    pub total_duplicates_found: usize,
    pub ingredients_with_duplicates: usize,
}

/// Inventory every ingredient occurrence across the batch without touching it.
///
/// Scans recipes in input order and ingredients in list order, recording each
/// occurrence unconditionally. The returned analysis describes what a
/// subsequent [`crate::dedup::deduplicate`] pass on the same batch would
/// remove: `total_duplicates_found` matches its removal count exactly.
pub fn analyze(recipes: &[Recipe]) -> DuplicateAnalysis {
    let mut occurrences: HashMap<String, Vec<Occurrence>> = HashMap::new();

    for (recipe_index, recipe) in recipes.iter().enumerate() {
        for ingredient in &recipe.ingredients {
            occurrences
                .entry(ingredient.clone())
                .or_default()
                .push(Occurrence {
                    recipe_id: recipe.id.clone(),
                    recipe_index,
                });
        }
    }

    let total_unique_ingredients = occurrences.len();
    let mut duplicate_ingredients = HashMap::new();
    let mut total_duplicates_found = 0;

    for (ingredient, all_occurrences) in occurrences {
        if all_occurrences.len() > 1 {
            total_duplicates_found += all_occurrences.len() - 1;
            duplicate_ingredients.insert(
                ingredient,
                DuplicateInfo {
                    total_occurrences: all_occurrences.len(),
                    duplicate_count: all_occurrences.len() - 1,
                    first_occurrence: all_occurrences[0].clone(),
                    all_occurrences,
                },
            );
        }
    }

    DuplicateAnalysis {
        total_unique_ingredients,
        ingredients_with_duplicates: duplicate_ingredients.len(),
        duplicate_ingredients,
        total_duplicates_found,
    }
}
