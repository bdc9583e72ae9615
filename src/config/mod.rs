//! Configuration management for Shroud.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Shroud uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`SHROUD_*` prefix)
//! - Default values for optional settings
//! - Typed validation errors
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shroud::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("shroud.toml")?;
//!
//! // Access configuration sections
//! println!("k threshold: {}", config.pipeline.k);
//! for rule in &config.pipeline.numeric {
//!     println!("noise column: {} (epsilon {})", rule.column, rule.epsilon);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [pipeline]
//! k = 2
//! seed = 42
//!
//! [[pipeline.numeric]]
//! column = "income"
//! epsilon = 0.5
//!
//! [[pipeline.string]]
//! column = "city"
//! method = "generalization"
//! level = 2
//!
//! [pipeline.audit]
//! enabled = true
//! log_path = "./audit/shroud_runs.log"
//!
//! [synthesis]
//! rows = 50
//! ```
//!
//! # Validation
//!
//! Configuration is validated on load and errors keep their domain type:
//! an out-of-set redaction method is an `UnsupportedStrategy`, a bad
//! epsilon an `InvalidParameter`.
//!
//! ```rust,no_run
//! use shroud::config::load_config;
//!
//! # fn example() {
//! match load_config("shroud.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AuditConfig, LoggingConfig, NumericRule, PipelineConfig, ShroudConfig,
    StringRule, SynthesisConfig,
};
