use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::book::{AddressBook, BookError};
use crate::config::Config;

pub mod birthday_handler;
pub mod config_handler;
pub mod contact_handler;
pub mod exit_handler;
pub mod help_handler;
pub mod version_handler;

/// Command line arguments structure
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>, flags: HashMap<String, Option<String>>) -> Self {
        Self { command, args, flags }
    }

    /// Tokenize an input line into command, positional arguments, and
    /// `--flag [value]` pairs. A leading `rolodex` token is stripped so
    /// pasted full command lines keep working. Only the command itself
    /// is lowercased; names stay case-sensitive.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized_input = input.replace('\u{a0}', " ");
        debug!("Normalized input: {}", normalized_input);
        let tokens = shell_words::split(&normalized_input)
            .map_err(|e| anyhow!("Tokenization error: {}", e))?;
        debug!("Tokenized input: {:?}", tokens);
        if tokens.is_empty() {
            return Err(anyhow!("No command provided"));
        }
        let mut tokens_iter = tokens.into_iter();
        let first_token = tokens_iter.next().unwrap();
        let command = if first_token.eq_ignore_ascii_case("rolodex") {
            tokens_iter
                .next()
                .ok_or_else(|| anyhow!("No command provided after 'rolodex'"))?
                .to_lowercase()
        } else {
            first_token.to_lowercase()
        };
        let mut args = Vec::new();
        let mut flags = HashMap::new();
        let mut current_flag: Option<String> = None;
        for token in tokens_iter {
            if token.starts_with("--") {
                if let Some(flag_name) = current_flag.take() {
                    flags.insert(flag_name, None);
                }
                current_flag = Some(token[2..].to_string());
            } else if let Some(flag_name) = current_flag.take() {
                flags.insert(flag_name, Some(token));
            } else {
                args.push(token);
            }
        }
        if let Some(flag_name) = current_flag {
            flags.insert(flag_name, None);
        }
        debug!("Final parsed command: {:?}, args: {:?}, flags: {:?}", command, args, flags);
        Ok(CommandArgs { command, args, flags })
    }
}

/// Standardized input preprocessing function
pub fn preprocess_input(input: &str) -> String {
    input.replace('\u{a0}', " ").trim().to_string()
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Mutable state threaded through every handler: the loaded contact
/// book and the active configuration. Load and save happen at the
/// application boundary, not here.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub config: &'a mut Config,
}

pub trait CommandHandler: Debug {
    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(contact_handler::ContactHandler),
            Box::new(birthday_handler::BirthdayHandler),
            Box::new(config_handler::ConfigHandler),
            Box::new(help_handler::HelpHandler),
            Box::new(version_handler::VersionHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    /// Dispatch to the first handler that claims the command. Handler
    /// errors are rendered as one-line user messages here and never
    /// escape to the caller; the session always continues.
    pub fn execute(&self, args: CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
        debug!("Attempting to execute command: {}", args.command);
        debug!("Parsed arguments: {:?}", args.args);
        debug!("Parsed flags: {:?}", args.flags);
        for handler in &self.handlers {
            if handler.can_handle(&args.command) {
                info!("Executing command '{}' with arguments: {:?}", args.command, args.args);
                return match handler.execute(&args, ctx) {
                    Ok(flow) => {
                        debug!("Command '{}' executed successfully", args.command);
                        Ok(flow)
                    }
                    Err(e) => {
                        log::error!("Failed to execute command '{}': {:?}", args.command, e);
                        println!("{}", render_error(&e));
                        Ok(Flow::Continue)
                    }
                };
            }
        }
        warn!("Unrecognized command: {}", args.command);
        println!("Invalid command. Type 'help' for a list of available commands.");
        Ok(Flow::Continue)
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing rendering of a handler error. Domain errors already
/// carry their message; anything else gets an `Error:` prefix.
fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<BookError>() {
        Some(book_err) => book_err.to_string(),
        None => format!("Error: {}", err),
    }
}
