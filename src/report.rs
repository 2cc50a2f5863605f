use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzer::Occurrence;
use crate::dedup::DedupStats;

/// Headline counts included in a removal report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_recipes: usize,
    pub recipes_modified: usize,
    pub total_ingredients_removed: usize,
    pub unique_ingredients_kept: usize,
}

/// Persistable record of one deduplication run: when it happened, the
/// headline counts, and the full per-ingredient removal ledger.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalReport {
    pub timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    pub removed_ingredients: HashMap<String, Vec<Occurrence>>,
}

impl RemovalReport {
    /// Assemble a report from dedup statistics. The timestamp is supplied by
    /// the caller so it reflects write time, not compute time.
    pub fn from_stats(stats: &DedupStats, timestamp: DateTime<Utc>) -> Self {
        RemovalReport {
            timestamp,
            summary: ReportSummary {
                total_recipes: stats.total_recipes,
                recipes_modified: stats.recipes_modified,
                total_ingredients_removed: stats.total_ingredients_removed,
                unique_ingredients_kept: stats.unique_ingredients_kept,
            },
            removed_ingredients: stats.removed_ingredients.clone(),
        }
    }
}

/// Share of all ingredient occurrences that the pass removed, in percent.
pub fn removal_percentage(stats: &DedupStats) -> f64 {
    if stats.total_ingredients_before == 0 {
        return 0.0;
    }
    stats.total_ingredients_removed as f64 / stats.total_ingredients_before as f64 * 100.0
}

/// How much smaller the cleaned serialization is than the original, in
/// percent. Returns 0 when the cleaned form did not shrink.
pub fn size_reduction(original_bytes: usize, cleaned_bytes: usize) -> f64 {
    if original_bytes == 0 || cleaned_bytes >= original_bytes {
        return 0.0;
    }
    (original_bytes - cleaned_bytes) as f64 / original_bytes as f64 * 100.0
}
