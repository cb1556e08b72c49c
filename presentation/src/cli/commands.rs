//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for js-tutor
#[derive(Parser, Debug)]
#[command(name = "js-tutor")]
#[command(author, version, about = "A rule-based JavaScript tutor for the terminal")]
#[command(long_about = r#"
js-tutor answers questions about JavaScript basics with short, canned
explanations: variables, functions, arrays, plus a help overview and a quiz.

Without a message it starts an interactive chat. With a message it answers
once and exits.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tutor.toml        Project-level config
3. ~/.config/js-tutor/config.toml   Global config

Example:
  js-tutor
  js-tutor "explain variables"
  js-tutor --latency-ms 0 "quiz"
"#)]
pub struct Cli {
    /// Message to answer once (starts interactive chat when omitted)
    pub message: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hide the typing indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Simulated reply delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_chat() {
        let cli = Cli::try_parse_from(["js-tutor"]).unwrap();
        assert!(cli.message.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.latency_ms.is_none());
    }

    #[test]
    fn test_one_shot_message_with_flags() {
        let cli = Cli::try_parse_from([
            "js-tutor",
            "-vv",
            "--latency-ms",
            "0",
            "--no-color",
            "explain variables",
        ])
        .unwrap();
        assert_eq!(cli.message.as_deref(), Some("explain variables"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.latency_ms, Some(0));
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_non_numeric_latency() {
        assert!(Cli::try_parse_from(["js-tutor", "--latency-ms", "slow"]).is_err());
    }

    #[test]
    fn test_config_paths() {
        let cli = Cli::try_parse_from([
            "js-tutor",
            "--config",
            "tutor.toml",
            "--log-conversation",
            "out/transcript.jsonl",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tutor.toml")));
        assert_eq!(
            cli.log_conversation,
            Some(PathBuf::from("out/transcript.jsonl"))
        );
    }
}
