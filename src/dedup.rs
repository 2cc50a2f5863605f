use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::analyzer::Occurrence;
use crate::model::Recipe;

/// Counters and removal ledger produced by one deduplication pass.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupStats {
    pub total_recipes: usize,
    /// Recipes that lost at least one ingredient.
    pub recipes_modified: usize,
    pub total_ingredients_before: usize,
    pub total_ingredients_after: usize,
    pub total_ingredients_removed: usize,
    pub unique_ingredients_kept: usize,
    /// Removed ingredient string -> every site it was dropped from, in batch
    /// order. The kept (first) occurrence is never listed here.
    pub removed_ingredients: HashMap<String, Vec<Occurrence>>,
}

/// Cleaned batch plus the statistics describing what was removed.
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    pub recipes: Vec<Recipe>,
    pub stats: DedupStats,
}

/// Keep only the first occurrence of each ingredient across the whole batch.
///
/// Recipes are visited in input order and ingredients in list order; the
/// first sighting of a string wins and every later one is dropped, including
/// repeats inside a single recipe. The input is left untouched: each output
/// record is a fresh copy of its input record with only the ingredient list
/// replaced, in the same position as the original.
///
/// The seen set lives for exactly one call, so re-running on the cleaned
/// output removes nothing further.
pub fn deduplicate(recipes: &[Recipe]) -> DedupOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut stats = DedupStats {
        total_recipes: recipes.len(),
        ..DedupStats::default()
    };

    let cleaned = recipes
        .iter()
        .enumerate()
        .map(|(recipe_index, recipe)| {
            let mut kept = Vec::with_capacity(recipe.ingredients.len());
            let mut modified = false;

            stats.total_ingredients_before += recipe.ingredients.len();

            for ingredient in &recipe.ingredients {
                if seen.insert(ingredient.clone()) {
                    kept.push(ingredient.clone());
                    stats.unique_ingredients_kept += 1;
                } else {
                    stats.total_ingredients_removed += 1;
                    modified = true;

                    stats
                        .removed_ingredients
                        .entry(ingredient.clone())
                        .or_default()
                        .push(Occurrence {
                            recipe_id: recipe.id.clone(),
                            recipe_index,
                        });
                }
            }

            stats.total_ingredients_after += kept.len();
            if modified {
                stats.recipes_modified += 1;
            }

            Recipe {
                id: recipe.id.clone(),
                ingredients: kept,
                extra: recipe.extra.clone(),
            }
        })
        .collect();

    DedupOutcome {
        recipes: cleaned,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_output_ingredients(recipes: &[Recipe]) -> Vec<&str> {
        recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().map(String::as_str))
            .collect()
    }

    #[test]
    fn test_keeps_first_occurrence_only() {
        let recipes = vec![
            Recipe::new(1, vec!["salt".into(), "pepper".into()]),
            Recipe::new(2, vec!["salt".into(), "sugar".into()]),
        ];

        let outcome = deduplicate(&recipes);

        assert_eq!(outcome.recipes[0].ingredients, vec!["salt", "pepper"]);
        assert_eq!(outcome.recipes[1].ingredients, vec!["sugar"]);
        assert_eq!(outcome.stats.total_ingredients_before, 4);
        assert_eq!(outcome.stats.total_ingredients_after, 3);
        assert_eq!(outcome.stats.total_ingredients_removed, 1);
        assert_eq!(outcome.stats.recipes_modified, 1);
        assert_eq!(outcome.stats.unique_ingredients_kept, 3);
    }

    #[test]
    fn test_empty_batch() {
        let outcome = deduplicate(&[]);

        assert!(outcome.recipes.is_empty());
        assert_eq!(outcome.stats.total_recipes, 0);
        assert_eq!(outcome.stats.total_ingredients_before, 0);
        assert_eq!(outcome.stats.total_ingredients_after, 0);
        assert_eq!(outcome.stats.total_ingredients_removed, 0);
        assert!(outcome.stats.removed_ingredients.is_empty());
    }

    #[test]
    fn test_duplicates_within_one_recipe() {
        let recipes = vec![Recipe::new(
            7,
            vec!["flour".into(), "flour".into(), "water".into()],
        )];

        let outcome = deduplicate(&recipes);

        assert_eq!(outcome.recipes[0].ingredients, vec!["flour", "water"]);
        assert_eq!(outcome.stats.total_ingredients_removed, 1);
        assert_eq!(outcome.stats.recipes_modified, 1);
        assert_eq!(outcome.stats.removed_ingredients["flour"].len(), 1);
        assert_eq!(
            outcome.stats.removed_ingredients["flour"][0].recipe_index,
            0
        );
    }

    #[test]
    fn test_removal_ledger_records_every_site() {
        let recipes = vec![
            Recipe::new("a", vec!["salt".into()]),
            Recipe::new("b", vec!["salt".into()]),
            Recipe::new("c", vec!["salt".into()]),
        ];

        let outcome = deduplicate(&recipes);

        let sites = &outcome.stats.removed_ingredients["salt"];
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].recipe_id, "b");
        assert_eq!(sites[0].recipe_index, 1);
        assert_eq!(sites[1].recipe_id, "c");
        assert_eq!(sites[1].recipe_index, 2);
    }

    #[test]
    fn test_conservation_invariant() {
        let recipes = vec![
            Recipe::new(1, vec!["a".into(), "b".into(), "a".into()]),
            Recipe::new(2, vec!["b".into(), "c".into()]),
            Recipe::new(3, vec![]),
        ];

        let outcome = deduplicate(&recipes);
        let stats = &outcome.stats;

        assert_eq!(
            stats.total_ingredients_before,
            stats.total_ingredients_after + stats.total_ingredients_removed
        );
        assert_eq!(stats.unique_ingredients_kept, stats.total_ingredients_after);
    }

    #[test]
    fn test_output_has_no_repeats() {
        let recipes = vec![
            Recipe::new(1, vec!["salt".into(), "salt".into(), "oil".into()]),
            Recipe::new(2, vec!["oil".into(), "salt".into(), "vinegar".into()]),
            Recipe::new(3, vec!["vinegar".into(), "oil".into()]),
        ];

        let outcome = deduplicate(&recipes);

        let flat = all_output_ingredients(&outcome.recipes);
        let unique: HashSet<&str> = flat.iter().copied().collect();
        assert_eq!(flat.len(), unique.len());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let recipes = vec![
            Recipe::new(1, vec!["salt".into(), "pepper".into()]),
            Recipe::new(2, vec!["salt".into(), "sugar".into()]),
        ];

        let first = deduplicate(&recipes);
        let second = deduplicate(&first.recipes);

        assert_eq!(second.recipes, first.recipes);
        assert_eq!(second.stats.total_ingredients_removed, 0);
        assert_eq!(second.stats.recipes_modified, 0);
    }

    #[test]
    fn test_non_ingredient_fields_unchanged() {
        let mut recipe = Recipe::new(9, vec!["salt".into()]);
        recipe
            .extra
            .insert("title".into(), serde_json::json!("Broth"));
        recipe
            .extra
            .insert("servings".into(), serde_json::json!(2));
        let recipes = vec![recipe.clone(), Recipe::new(10, vec!["salt".into()])];

        let outcome = deduplicate(&recipes);

        assert_eq!(outcome.recipes[0], recipe);
        assert_eq!(outcome.recipes[1].id, 10);
        assert_eq!(outcome.recipes.len(), 2);
    }

    #[test]
    fn test_input_not_mutated() {
        let recipes = vec![
            Recipe::new(1, vec!["salt".into()]),
            Recipe::new(2, vec!["salt".into()]),
        ];
        let before = recipes.clone();

        deduplicate(&recipes);

        assert_eq!(recipes, before);
    }
}
