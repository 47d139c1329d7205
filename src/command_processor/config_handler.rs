//! Config command handler for Rolodex
//!
//! Handles config-related commands such as set and show.

use super::{CommandArgs, CommandContext, CommandHandler, Flow};
use crate::book::BookError;
use anyhow::Result;

#[derive(Debug)]
pub struct ConfigHandler;

impl CommandHandler for ConfigHandler {
    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
        match args.args.first().map(|s| s.as_str()) {
            Some("set") => set_value(args, ctx),
            Some("get") | Some("show") => show_value(args, ctx),
            _ => {
                println!("Unknown config command. Available commands: set, get, show");
                Ok(Flow::Continue)
            }
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "config"
    }
}

fn set_value(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    if args.args.len() < 3 {
        return Err(BookError::InvalidInput(
            "Usage: config set [key] [value]".to_string(),
        )
        .into());
    }
    let key = &args.args[1];
    let value = &args.args[2];

    match key.as_str() {
        "birthdays.default_window_days" => {
            let days = value.parse::<u32>().map_err(|_| {
                BookError::InvalidInput(format!(
                    "{} must be a whole number of days",
                    key
                ))
            })?;
            ctx.config.birthdays.default_window_days = Some(days);
        }
        "contacts.book_file" => {
            ctx.config.contacts.book_file = Some(value.clone());
        }
        _ => {
            println!("Unknown configuration key: {}", key);
            return Ok(Flow::Continue);
        }
    }

    ctx.config.save()?;
    println!("Configuration updated: {} = {}", key, value);
    Ok(Flow::Continue)
}

fn show_value(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    match args.args.get(1).map(|s| s.as_str()) {
        None | Some("all") => {
            println!(
                "birthdays.default_window_days = {}",
                ctx.config.window_days()
            );
            println!(
                "contacts.book_file = {}",
                ctx.config.contacts.book_file.as_deref().unwrap_or("(default)")
            );
        }
        Some("birthdays.default_window_days") => {
            println!("{}", ctx.config.window_days());
        }
        Some("contacts.book_file") => {
            println!(
                "{}",
                ctx.config.contacts.book_file.as_deref().unwrap_or("(default)")
            );
        }
        Some(key) => println!("Unknown configuration key: {}", key),
    }
    Ok(Flow::Continue)
}
