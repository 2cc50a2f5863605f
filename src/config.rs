use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Output and display settings for the deduplication tool
#[derive(Debug, Deserialize, Clone)]
pub struct DedupConfig {
    /// Suffix appended to the input file stem when no output path is given
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    /// How many duplicated ingredients the analysis display lists
    #[serde(default = "default_top_duplicates")]
    pub top_duplicates: usize,
    /// How many ingredients get a per-recipe removal preview with --show-removals
    #[serde(default = "default_preview_removals")]
    pub preview_removals: usize,
    /// How many most-removed ingredients the final summary lists
    #[serde(default = "default_top_removals")]
    pub top_removals: usize,
    /// Whether a removal report is written next to the cleaned collection
    #[serde(default = "default_write_report")]
    pub write_report: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            output_suffix: default_output_suffix(),
            top_duplicates: default_top_duplicates(),
            preview_removals: default_preview_removals(),
            top_removals: default_top_removals(),
            write_report: default_write_report(),
        }
    }
}

// Default value functions
fn default_output_suffix() -> String {
    "_global_deduplicated".to_string()
}

fn default_top_duplicates() -> usize {
    15
}

fn default_preview_removals() -> usize {
    5
}

fn default_top_removals() -> usize {
    10
}

fn default_write_report() -> bool {
    true
}

impl DedupConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_DEDUP__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_DEDUP__TOP_DUPLICATES
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_DEDUP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
