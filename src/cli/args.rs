//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// audio-slim - shrink recordings to fit an upload ceiling
#[derive(Parser, Debug)]
#[command(name = "audio-slim")]
#[command(version)]
#[command(about = "Convert audio into compact mono 16-bit WAV files that fit an upload size limit")]
#[command(long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Optimize an audio file into a small mono WAV
    Optimize {
        /// Source audio file (mp3, m4a, ogg, flac, wav, webm, ...)
        input: PathBuf,

        /// Output path (default: <name>_optimized.wav next to the input)
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Size ceiling for the optimized file (e.g., 4MiB, 512KB, 1000)
        #[arg(short = 's', long, value_name = "SIZE")]
        max_size: Option<String>,

        /// Overwrite the output file if it already exists
        #[arg(short = 'f', long)]
        force: bool,

        /// Print the optimization report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Check whether a file can be uploaded without optimizing
    Check {
        /// Audio file to check
        input: PathBuf,

        /// Upload size limit (e.g., 4MiB)
        #[arg(short = 's', long, value_name = "SIZE")]
        max_size: Option<String>,
    },
    /// List accepted upload formats
    Formats,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed optimize options, after config merge
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub max_size: crate::domain::size::ByteSize,
    pub overwrite: bool,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["max_size", "output_dir", "overwrite"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_optimize_defaults() {
        let cli = Cli::parse_from(["audio-slim", "optimize", "talk.mp3"]);
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Optimize {
                input,
                output,
                max_size,
                force,
                json,
            } => {
                assert_eq!(input, PathBuf::from("talk.mp3"));
                assert!(output.is_none());
                assert!(max_size.is_none());
                assert!(!force);
                assert!(!json);
            }
            other => panic!("Expected Optimize command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_optimize_flags() {
        let cli = Cli::parse_from([
            "audio-slim",
            "optimize",
            "talk.mp3",
            "-o",
            "out.wav",
            "-s",
            "2MiB",
            "-f",
            "--json",
        ]);
        if let Commands::Optimize {
            output,
            max_size,
            force,
            json,
            ..
        } = cli.command
        {
            assert_eq!(output, Some(PathBuf::from("out.wav")));
            assert_eq!(max_size, Some("2MiB".to_string()));
            assert!(force);
            assert!(json);
        } else {
            panic!("Expected Optimize command");
        }
    }

    #[test]
    fn cli_counts_verbosity_after_subcommand() {
        let cli = Cli::parse_from(["audio-slim", "optimize", "a.wav", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_check() {
        let cli = Cli::parse_from(["audio-slim", "check", "memo.ogg", "--max-size", "1MB"]);
        if let Commands::Check { input, max_size } = cli.command {
            assert_eq!(input, PathBuf::from("memo.ogg"));
            assert_eq!(max_size, Some("1MB".to_string()));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn cli_parses_formats() {
        let cli = Cli::parse_from(["audio-slim", "formats"]);
        assert!(matches!(cli.command, Commands::Formats));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["audio-slim", "config", "init"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["audio-slim", "config", "set", "max_size", "2MiB"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "max_size");
            assert_eq!(value, "2MiB");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["audio-slim"]).is_err());
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("max_size"));
        assert!(is_valid_config_key("output_dir"));
        assert!(is_valid_config_key("overwrite"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
