//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "shroud.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Shroud configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your column rules", self.output);
                println!("  2. Validate configuration: shroud validate-config");
                println!("  3. Try a dry run: shroud anonymize data.csv --dry-run");
                println!("  4. Run for real: shroud anonymize data.csv -o anonymized.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Shroud Configuration File
# Tabular Data Anonymization Tool

[application]
log_level = "info"
dry_run = false

[pipeline]
# Rows whose quasi-identifier combination appears fewer than k times
# are treated as risky and redacted.
k = 2

# Uncomment for reproducible runs
# seed = 42

# Numeric columns receive Laplace noise scaled by the column's value
# range divided by epsilon.
[[pipeline.numeric]]
column = "income"
epsilon = 1.0

# String columns are redacted on risky rows only.
# Methods: suppression | generalization | synthetic
[[pipeline.string]]
column = "name"
method = "synthetic"

[[pipeline.string]]
column = "city"
method = "generalization"
level = 2

[pipeline.audit]
enabled = false
log_path = "./audit/shroud_runs.log"
json_format = true

[synthesis]
rows = 50

[logging]
file_enabled = false
file_path = "./logs"
file_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Shroud Configuration File
# Tabular Data Anonymization Tool
#
# This file contains all configuration options with examples and explanations.
#
# Values wrapped in ${VAR} are substituted from environment variables at
# load time. Settings can also be overridden with SHROUD_* environment
# variables, e.g. SHROUD_PIPELINE_K=5.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (report planned changes without writing output)
dry_run = false

# ============================================================================
# Anonymization Pipeline
# ============================================================================
[pipeline]
# k-anonymity threshold. A row is risky when its combination of string
# column values is shared by fewer than k rows.
k = 2

# Random seed for reproducible runs. Omit for a fresh seed per run.
# seed = 42

# ----------------------------------------------------------------------------
# Numeric columns: Laplace noise injection
# ----------------------------------------------------------------------------
# Noise scale is (max - min) / epsilon per column. Smaller epsilon means
# stronger noise.
[[pipeline.numeric]]
column = "income"
epsilon = 1.0

[[pipeline.numeric]]
column = "age"
epsilon = 0.5

# ----------------------------------------------------------------------------
# String columns: redaction on risky rows
# ----------------------------------------------------------------------------
# Methods:
#   suppression     - replace the whole value with "*"
#   generalization  - keep the first `level` characters, mask the rest
#   synthetic       - replace with a generated value matching the column
#                     name (name -> person name, city -> city,
#                     email -> email address, otherwise a number)
[[pipeline.string]]
column = "name"
method = "synthetic"

[[pipeline.string]]
column = "city"
method = "generalization"
level = 2

[[pipeline.string]]
column = "email"
method = "suppression"

# ----------------------------------------------------------------------------
# Audit logging
# ----------------------------------------------------------------------------
# When enabled, each live run appends an entry with SHA-256 hashes of the
# redacted values. Plaintext values are never written.
[pipeline.audit]
enabled = false
log_path = "./audit/shroud_runs.log"
json_format = true

# ============================================================================
# Synthetic Dataset Generation
# ============================================================================
[synthesis]
# Default row count for `shroud synthesize`
rows = 50

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging
file_enabled = false

# Local log file directory
file_path = "./logs"

# Log rotation (daily or never)
file_rotation = "daily"
"#
        .to_string()
    }
}
