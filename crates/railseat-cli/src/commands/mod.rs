//! CLI command definitions and dispatch.

pub mod config;
pub mod shell;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use railseat_core::config::AppConfig;
use railseat_core::error::AppError;

/// Railseat: seat allocation with RAC and waiting-list promotion
#[derive(Debug, Parser)]
#[command(name = "railseat", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive booking menu
    Shell(shell::ShellArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Shell(args) => shell::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: map a dialoguer prompt failure into an application error
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["railseat", "-f", "json", "-c", "x.toml", "shell"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, "x.toml");
        assert!(matches!(cli.command, Commands::Shell(_)));
    }

    #[test]
    fn test_parse_config_generate() {
        let cli = Cli::try_parse_from(["railseat", "config", "generate", "-o", "out.toml"]).unwrap();
        assert_eq!(cli.config, "config/default.toml");
        match cli.command {
            Commands::Config(args) => assert!(matches!(
                args.command,
                config::ConfigCommand::Generate { ref output } if output == "out.toml"
            )),
            _ => panic!("expected config command"),
        }
    }
}
