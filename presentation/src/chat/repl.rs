//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::TypingIndicator;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::warn;
use tutor_application::{APOLOGY_MESSAGE, ConversationSession};
use tutor_domain::{UserMessage, WELCOME_MESSAGE};

/// Interactive chat REPL
///
/// Owns exactly one [`ConversationSession`]. Input validation, the welcome
/// message, the typing indicator and rendering live here; the session only
/// sequences turns.
pub struct ChatRepl {
    session: Arc<ConversationSession>,
    formatter: ConsoleFormatter,
    typing_indicator: bool,
}

impl ChatRepl {
    pub fn new(session: Arc<ConversationSession>) -> Self {
        Self {
            session,
            formatter: ConsoleFormatter::new(true),
            typing_indicator: true,
        }
    }

    /// Set whether to show the typing indicator
    pub fn with_typing_indicator(mut self, show: bool) -> Self {
        self.typing_indicator = show;
        self
    }

    /// Set whether to use colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.formatter = ConsoleFormatter::new(color);
        self
    }

    /// Answer one line of user input
    ///
    /// Returns `None` for blank input, which never reaches the session. Any
    /// exchange error is shown as the generic apology.
    pub async fn reply_to(&self, line: &str) -> Option<String> {
        let message = UserMessage::try_new(line)?;

        let indicator = TypingIndicator::start(self.typing_indicator);
        let reply = match self.session.exchange(message.content()).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Exchange failed: {}", e);
                APOLOGY_MESSAGE.to_string()
            }
        };
        indicator.stop();

        Some(self.formatter.format_reply(&reply))
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    if let Some(cmd) = ReplCommand::parse(&line) {
                        if self.handle_command(cmd, &mut rl) {
                            break;
                        }
                        continue;
                    }

                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if let Some(output) = self.reply_to(line).await {
                        println!();
                        println!("{}", output);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           JavaScript Tutor - Chat           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", self.formatter.format_reply(WELCOME_MESSAGE));
        println!("{}", self.formatter.format_notice("Type /help for commands."));
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: ReplCommand, rl: &mut DefaultEditor) -> bool {
        match cmd {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help_text());
                false
            }
            ReplCommand::History => {
                println!();
                println!("{}", self.formatter.format_history(&self.session.history()));
                false
            }
            ReplCommand::Clear => {
                let confirmed = matches!(
                    rl.readline("Clear the conversation? [y/N] "),
                    Ok(answer) if answer.trim().eq_ignore_ascii_case("y")
                );
                if confirmed {
                    self.session.reset();
                    self.print_welcome();
                }
                false
            }
            ReplCommand::Theme => {
                let color = !self.formatter.color();
                self.formatter = ConsoleFormatter::new(color);
                let mode = if color { "Colored" } else { "Plain" };
                println!("{}", self.formatter.format_notice(&format!("{} output", mode)));
                false
            }
            ReplCommand::Unknown => {
                println!("Unknown command");
                println!("Type /help for available commands");
                false
            }
        }
    }
}
