//! Command-line argument parsing
//!
//! Supports:
//! - Replaying a scenario and printing the resulting drawer state
//! - Printing the effective configuration (or where it lives)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drag-resizable drawer driver
#[derive(Parser, Debug)]
#[command(name = "drawer", version, about = "Drag-resizable side drawer driver")]
pub struct CliArgs {
    /// Configuration file (defaults to ~/.config/drawer/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay a scenario file and print the final drawer state
    Replay {
        /// Scenario file (.yaml/.yml or .json)
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,

        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also print the mutated page
        #[arg(long)]
        html: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_args() {
        let args = CliArgs::parse_from(["drawer", "replay", "s.yaml", "--json"]);
        match args.command {
            CliCommand::Replay {
                scenario,
                json,
                html,
            } => {
                assert_eq!(scenario, PathBuf::from("s.yaml"));
                assert!(json);
                assert!(!html);
            }
            other => panic!("Expected Replay, got {:?}", other),
        }
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_global_config_flag() {
        let args = CliArgs::parse_from(["drawer", "config", "--config", "/tmp/c.yaml", "--path"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.yaml")));
        assert!(matches!(args.command, CliCommand::Config { path: true }));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(CliArgs::try_parse_from(["drawer"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
