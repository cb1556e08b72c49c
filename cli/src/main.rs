//! CLI entrypoint for js-tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_application::ConversationSession;
use tutor_domain::{ResponseGenerator, RuleSet};
use tutor_infrastructure::{ConfigLoader, FileConfig, FixedLatency, JsonlConversationLogger};
use tutor_presentation::{ChatRepl, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting js-tutor");

    let config = load_config(&cli)?;

    if cli.show_config {
        print!("{}", ConfigLoader::describe_config_sources());
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // === Dependency Injection ===
    let session_config = config.session_config();
    let generator = Arc::new(ResponseGenerator::new(RuleSet::javascript_tutor()));
    let latency = Arc::new(FixedLatency::new(session_config.reply_delay));

    let mut session = ConversationSession::with_config(generator, latency, &session_config)?;

    if let Some(path) = config.conversation_log_path() {
        match JsonlConversationLogger::new(&path) {
            Some(logger) => {
                info!("Writing conversation transcript to {}", logger.path().display());
                session = session.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Continuing without a conversation transcript"),
        }
    }

    let mut repl = ChatRepl::new(Arc::new(session))
        .with_typing_indicator(config.repl.typing_indicator)
        .with_color(config.output.color);

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        let Some(output) = repl.reply_to(message).await else {
            bail!("Message cannot be empty. Run without a message for interactive mode.");
        };
        println!("{}", output);
        return Ok(());
    }

    repl.run().await?;
    Ok(())
}

/// Merge config files with CLI overrides and validate the result
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(ms) = cli.latency_ms {
        config.session.latency_ms = ms;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if cli.quiet {
        config.repl.typing_indicator = false;
    }
    if let Some(path) = &cli.log_conversation {
        config.logging.conversation_log = Some(path.display().to_string());
    }

    config.validate()?;
    Ok(config)
}
