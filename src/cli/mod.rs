//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Shroud using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Shroud - Tabular Data Anonymization Tool
#[derive(Parser, Debug)]
#[command(name = "shroud")]
#[command(version, about, long_about = None)]
#[command(author = "Shroud Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shroud.toml", env = "SHROUD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHROUD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a CSV file using the configured pipeline
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Generate a synthetic dataset from scratch
    Synthesize(commands::synthesize::SynthesizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from(["shroud", "anonymize", "data.csv"]);
        assert_eq!(cli.config, "shroud.toml");
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.input, "data.csv");
                assert_eq!(args.output, "anonymized.csv");
            }
            _ => panic!("expected anonymize command"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["shroud", "--config", "custom.toml", "anonymize", "data.csv"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["shroud", "--log-level", "debug", "anonymize", "data.csv"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_anonymize_overrides() {
        let cli = Cli::parse_from([
            "shroud",
            "anonymize",
            "data.csv",
            "--dry-run",
            "--k",
            "5",
            "--seed",
            "42",
        ]);
        match cli.command {
            Commands::Anonymize(args) => {
                assert!(args.dry_run);
                assert_eq!(args.k, Some(5));
                assert_eq!(args.seed, Some(42));
            }
            _ => panic!("expected anonymize command"),
        }
    }

    #[test]
    fn test_cli_parse_synthesize() {
        let cli = Cli::parse_from([
            "shroud",
            "synthesize",
            "--columns",
            "name,city",
            "--rows",
            "10",
        ]);
        match cli.command {
            Commands::Synthesize(args) => {
                assert_eq!(args.columns, Some("name,city".to_string()));
                assert_eq!(args.rows, Some(10));
            }
            _ => panic!("expected synthesize command"),
        }
    }

    #[test]
    fn test_cli_parse_synthesize_requires_schema() {
        let result = Cli::try_parse_from(["shroud", "synthesize", "--rows", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_synthesize_rejects_both_schemas() {
        let result = Cli::try_parse_from([
            "shroud",
            "synthesize",
            "--columns",
            "name",
            "--like",
            "data.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["shroud", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["shroud", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
