use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::DedupError;
use crate::model::Recipe;

/// Read and parse a recipe collection from a JSON file.
///
/// Fails fast when the top level is anything other than an array; the
/// deduplication engine is never invoked on malformed input. Records missing
/// an `ingredients` field deserialize with an empty list.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, DedupError> {
    let content = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content)?;

    if !parsed.is_array() {
        return Err(DedupError::InvalidInput(
            "collection file must contain an array of recipes".to_string(),
        ));
    }

    let recipes: Vec<Recipe> = serde_json::from_value(parsed)?;
    debug!("loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Write any serializable value as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DedupError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Derive the default cleaned-collection path: a sibling of the input named
/// `<stem><suffix><ext>`, e.g. `recipes.json` -> `recipes_global_deduplicated.json`.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("recipes");
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    input.with_file_name(name)
}

/// Derive the removal-report path for a given cleaned-collection path:
/// `clean.json` -> `clean_removal_report.json`.
pub fn report_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("recipes");
    let mut name = format!("{stem}_removal_report");
    if let Some(ext) = output.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    output.with_file_name(name)
}
