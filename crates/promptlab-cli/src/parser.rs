//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! credential can come from a flag, the environment or a `.env` file.

use clap::Parser;
use promptlab_openrouter::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for comparing one prompt across many models.
#[derive(Parser)]
#[command(name = "promptlab")]
#[command(about = "Run one prompt across many LLMs and compare the answers")]
#[command(version)]
pub struct Cli {
    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenRouter API root
    #[arg(long, env = "OPENROUTER_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Supabase project URL; enables the remote result store together with --supabase-key
    #[arg(long, env = "SUPABASE_URL", global = true)]
    pub supabase_url: Option<String>,

    /// Supabase service key
    #[arg(long, env = "SUPABASE_KEY", global = true, hide_env_values = true)]
    pub supabase_key: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "promptlab",
            "run",
            "tests/greeting.yaml",
            "--verbose",
            "--api-key",
            "sk-test",
            "--base-url",
            "http://localhost:8080/api/v1",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.base_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["promptlab", "serve"]);
        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                static_dir,
                data_dir,
                templates_dir,
                api_only,
            }) => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8000);
                assert!(static_dir.is_none());
                assert_eq!(data_dir, PathBuf::from("data"));
                assert_eq!(templates_dir, PathBuf::from("templates"));
                assert!(!api_only);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_run_args() {
        let cli = Cli::parse_from([
            "promptlab",
            "run",
            "tests/greeting.yaml",
            "-o",
            "out",
            "--max-tokens",
            "256",
        ]);
        match cli.command {
            Some(Commands::Run {
                config,
                output_dir,
                max_tokens,
            }) => {
                assert_eq!(config, PathBuf::from("tests/greeting.yaml"));
                assert_eq!(output_dir, PathBuf::from("out"));
                assert_eq!(max_tokens, Some(256));
            }
            _ => panic!("expected run command"),
        }
    }
}
