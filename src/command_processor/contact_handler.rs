//! Contact command handler for Rolodex
//!
//! Handles the add, change, phone, and all commands.

use super::{CommandArgs, CommandContext, CommandHandler, Flow};
use crate::book::{BookError, Name, Phone, Record};
use anyhow::Result;

#[derive(Debug)]
pub struct ContactHandler;

impl CommandHandler for ContactHandler {
    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
        match args.command.as_str() {
            "add" => add_contact(args, ctx),
            "change" => change_contact(args, ctx),
            "phone" => show_phone(args, ctx),
            "all" => show_all(ctx),
            _ => Ok(Flow::Continue),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "change" | "phone" | "all")
    }
}

fn add_contact(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    if args.args.len() < 2 {
        return Err(BookError::InvalidInput(
            "Usage: add [name] [phone]".to_string(),
        )
        .into());
    }
    let name = Name::new(&args.args[0])?;
    let phone = Phone::new(&args.args[1])?;

    let message = match ctx.book.find_mut(name.as_str()) {
        Some(record) => {
            record.add_phone(phone);
            "Contact updated"
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone);
            ctx.book.add_record(record);
            "Contact added"
        }
    };
    println!("{}", message);
    Ok(Flow::Continue)
}

fn change_contact(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    if args.args.len() < 3 {
        return Err(BookError::InvalidInput(
            "Usage: change [name] [oldphone] [newphone]".to_string(),
        )
        .into());
    }
    let name = &args.args[0];
    let new_phone = Phone::new(&args.args[2])?;

    let record = ctx
        .book
        .find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.clone()))?;
    record.edit_phone(&args.args[1], new_phone)?;

    println!("Contact updated");
    Ok(Flow::Continue)
}

fn show_phone(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    if args.args.is_empty() {
        return Err(BookError::InvalidInput("Usage: phone [name]".to_string()).into());
    }
    let name = &args.args[0];
    let record = ctx
        .book
        .find(name)
        .ok_or_else(|| BookError::NotFound(name.clone()))?;

    if record.phones().is_empty() {
        println!("{} has no phones", name);
    } else {
        let phones = record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: {}", name, phones);
    }
    Ok(Flow::Continue)
}

fn show_all(ctx: &mut CommandContext) -> Result<Flow> {
    if ctx.book.is_empty() {
        println!("No contacts yet");
        return Ok(Flow::Continue);
    }
    for record in ctx.book.records() {
        println!("{}", record);
    }
    Ok(Flow::Continue)
}
