//! Command-line entry point for global ingredient deduplication.
//!
//! Reads a JSON collection of recipes, optionally shows a duplicate
//! analysis, removes every ingredient occurrence after the first across the
//! whole collection, and writes the cleaned collection plus a removal
//! report.
//!
//! ```bash
//! # Remove all global duplicates
//! recipe-dedup recipes.json
//!
//! # Preview changes with detailed analysis
//! recipe-dedup recipes.json --preview --show-analysis --show-removals
//!
//! # Specify output file
//! recipe-dedup recipes.json clean_recipes.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use log::debug;
use serde_json::Value;

use recipe_dedup::analyzer::{self, DuplicateAnalysis};
use recipe_dedup::config::DedupConfig;
use recipe_dedup::dedup::{self, DedupStats};
use recipe_dedup::error::DedupError;
use recipe_dedup::files;
use recipe_dedup::report::{self, RemovalReport};

/// Remove duplicate ingredients globally across a recipe collection.
///
/// Walks recipes in order and keeps only the first occurrence of each
/// ingredient string in the entire collection; every later occurrence is
/// dropped. Common ingredients like "salt" will survive in one recipe only.
#[derive(Parser)]
#[command(name = "recipe-dedup", version)]
struct Cli {
    /// Path to the JSON recipe collection to clean
    input: PathBuf,

    /// Where to write the cleaned collection (default: <input>_global_deduplicated.json)
    output: Option<PathBuf>,

    /// Show the duplicate analysis without modifying any files
    #[arg(long)]
    preview: bool,

    /// Display the duplicate analysis before cleaning
    #[arg(long)]
    show_analysis: bool,

    /// List the recipes each duplicated ingredient would be removed from
    #[arg(long)]
    show_removals: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error processing recipes: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DedupError> {
    let config = DedupConfig::load()?;
    debug!("loaded config: {:?}", config);

    println!("Reading recipes from: {}", cli.input.display());
    let recipes = files::load_recipes(&cli.input)?;
    println!(
        "Processing {} recipes for global deduplication...",
        recipes.len()
    );

    if cli.show_analysis || cli.preview {
        let analysis = analyzer::analyze(&recipes);
        print_analysis(&analysis, &config, cli.show_removals);
    }

    if cli.preview {
        println!();
        println!("Preview mode - no files were modified");
        return Ok(());
    }

    let outcome = dedup::deduplicate(&recipes);
    let output = match &cli.output {
        Some(path) => path.clone(),
        None => files::default_output_path(&cli.input, &config.output_suffix),
    };
    files::save_json(&output, &outcome.recipes)?;

    print_summary(&outcome.stats, &output, &config);

    // Size comparison uses the compact serialization on both sides so the
    // pretty-printing of the output file doesn't skew the numbers.
    let original_bytes = serde_json::to_string(&recipes)?.len();
    let cleaned_bytes = serde_json::to_string(&outcome.recipes)?.len();
    let shrink = report::size_reduction(original_bytes, cleaned_bytes);
    if shrink > 0.0 {
        println!("  File size reduced by {shrink:.1}%");
    }

    if config.write_report && !outcome.stats.removed_ingredients.is_empty() {
        let removal_report = RemovalReport::from_stats(&outcome.stats, Utc::now());
        let report_path = files::report_path_for(&output);
        files::save_json(&report_path, &removal_report)?;
        println!("  Removal report saved to: {}", report_path.display());
    }

    Ok(())
}

fn print_analysis(analysis: &DuplicateAnalysis, config: &DedupConfig, show_removals: bool) {
    println!();
    println!("GLOBAL DUPLICATE ANALYSIS");
    println!("=========================");
    println!(
        "  Unique ingredients:          {}",
        analysis.total_unique_ingredients
    );
    println!(
        "  Ingredients with duplicates: {}",
        analysis.ingredients_with_duplicates
    );
    println!(
        "  Occurrences to remove:       {}",
        analysis.total_duplicates_found
    );

    if analysis.duplicate_ingredients.is_empty() {
        return;
    }

    // Sort by duplicate count descending, name as the tie-break so the
    // listing is stable run to run.
    let mut sorted: Vec<_> = analysis.duplicate_ingredients.iter().collect();
    sorted.sort_by(|a, b| {
        b.1.duplicate_count
            .cmp(&a.1.duplicate_count)
            .then_with(|| a.0.cmp(b.0))
    });

    println!();
    println!("Most duplicated ingredients:");
    for (ingredient, info) in sorted.iter().take(config.top_duplicates) {
        println!(
            "  \"{}\": {} duplicates ({} occurrences, first in recipe {})",
            ingredient,
            info.duplicate_count,
            info.total_occurrences,
            id_display(&info.first_occurrence.recipe_id)
        );
    }

    if show_removals {
        println!();
        println!("Removal preview:");
        for (ingredient, info) in sorted.iter().take(config.preview_removals) {
            println!("  \"{ingredient}\" will be removed from:");
            for occurrence in &info.all_occurrences[1..] {
                println!(
                    "    - recipe {} (position {})",
                    id_display(&occurrence.recipe_id),
                    occurrence.recipe_index
                );
            }
        }
    }
}

fn print_summary(stats: &DedupStats, output: &Path, config: &DedupConfig) {
    println!();
    println!("GLOBAL DEDUPLICATION COMPLETE");
    println!("=============================");
    println!("  Output saved to:     {}", output.display());
    println!("  Total recipes:       {}", stats.total_recipes);
    println!("  Recipes modified:    {}", stats.recipes_modified);
    println!(
        "  Ingredients removed: {}",
        stats.total_ingredients_removed
    );
    println!("  Unique kept:         {}", stats.unique_ingredients_kept);
    println!(
        "  Ingredients:         {} -> {}",
        stats.total_ingredients_before, stats.total_ingredients_after
    );
    println!(
        "  Reduction:           {:.1}% of all ingredient occurrences",
        report::removal_percentage(stats)
    );

    if !stats.removed_ingredients.is_empty() {
        let mut sorted: Vec<_> = stats.removed_ingredients.iter().collect();
        sorted.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));

        println!();
        println!("Most frequently removed ingredients:");
        for (ingredient, sites) in sorted.iter().take(config.top_removals) {
            println!("  \"{}\": removed from {} recipes", ingredient, sites.len());
        }
    }
}

/// Render a recipe id without JSON quoting for string ids.
fn id_display(id: &Value) -> String {
    match id.as_str() {
        Some(s) => s.to_string(),
        None => id.to_string(),
    }
}
