//! Birthday command handler for Rolodex
//!
//! Handles the add-birthday, show-birthday, and birthdays commands.

use super::{CommandArgs, CommandContext, CommandHandler, Flow};
use crate::book::{Birthday, BookError, Name, Record, BIRTHDAY_FORMAT};
use anyhow::Result;

#[derive(Debug)]
pub struct BirthdayHandler;

impl CommandHandler for BirthdayHandler {
    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
        match args.command.as_str() {
            "add-birthday" => add_birthday(args, ctx),
            "show-birthday" => show_birthday(args, ctx),
            "birthdays" => birthdays(args, ctx),
            _ => Ok(Flow::Continue),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add-birthday" | "show-birthday" | "birthdays")
    }
}

fn add_birthday(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    if args.args.len() < 2 {
        return Err(BookError::InvalidInput(
            "Usage: add-birthday [name] [DD.MM.YYYY]".to_string(),
        )
        .into());
    }
    let birthday = Birthday::parse(&args.args[1])?;

    // Like `add`, a birthday for an unknown name creates the contact.
    match ctx.book.find_mut(&args.args[0]) {
        Some(record) => record.set_birthday(birthday),
        None => {
            let mut record = Record::new(Name::new(&args.args[0])?);
            record.set_birthday(birthday);
            ctx.book.add_record(record);
        }
    }
    println!("Birthday added");
    Ok(Flow::Continue)
}

fn show_birthday(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    if args.args.is_empty() {
        return Err(
            BookError::InvalidInput("Usage: show-birthday [name]".to_string()).into()
        );
    }
    let name = &args.args[0];
    let record = ctx
        .book
        .find(name)
        .ok_or_else(|| BookError::NotFound(name.clone()))?;

    match record.birthday() {
        Some(birthday) => println!("{}: {}", name, birthday),
        None => println!("Birthday is not set for contact [{}]", name),
    }
    Ok(Flow::Continue)
}

fn birthdays(args: &CommandArgs, ctx: &mut CommandContext) -> Result<Flow> {
    let days = match args.flags.get("days") {
        Some(Some(value)) => value.parse::<u32>().map_err(|_| {
            BookError::InvalidInput("--days must be a whole number".to_string())
        })?,
        Some(None) => {
            return Err(
                BookError::InvalidInput("--days requires a value".to_string()).into()
            );
        }
        None => ctx.config.window_days(),
    };

    let upcoming = ctx.book.upcoming_birthdays(days);
    if upcoming.is_empty() {
        println!("No birthdays in the next {} days", days);
        return Ok(Flow::Continue);
    }

    println!("Upcoming birthdays:");
    for entry in upcoming {
        println!(
            "{} - {}",
            entry.name,
            entry.congratulation_date.format(BIRTHDAY_FORMAT)
        );
    }
    Ok(Flow::Continue)
}
