//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Shroud configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Validate configuration
        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Dry Run: {}", config.application.dry_run);
                println!("  k-anonymity threshold: {}", config.pipeline.k);
                println!(
                    "  Seed: {}",
                    config
                        .pipeline
                        .seed
                        .map_or_else(|| "random".to_string(), |s| s.to_string())
                );

                println!("  Noise columns: {}", config.pipeline.numeric.len());
                for rule in &config.pipeline.numeric {
                    println!("    {} (epsilon {})", rule.column, rule.epsilon);
                }

                println!("  Redaction columns: {}", config.pipeline.string.len());
                for rule in &config.pipeline.string {
                    println!("    {} ({})", rule.column, rule.method);
                }

                println!("  Audit Enabled: {}", config.pipeline.audit.enabled);
                if config.pipeline.audit.enabled {
                    println!("  Audit Log: {}", config.pipeline.audit.log_path.display());
                    println!(
                        "  Audit Format: {}",
                        if config.pipeline.audit.json_format {
                            "json"
                        } else {
                            "text"
                        }
                    );
                }

                println!("  Synthesis Rows: {}", config.synthesis.rows);
                println!("  File Logging: {}", config.logging.file_enabled);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
