//! Help command handler for Rolodex
//!
//! Handles the help command and the hello greeting.

use super::{CommandArgs, CommandContext, CommandHandler, Flow};
use anyhow::Result;

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, args: &CommandArgs, _ctx: &mut CommandContext) -> Result<Flow> {
        if args.command == "hello" {
            println!("How can I help you?");
        } else {
            print_help();
        }
        Ok(Flow::Continue)
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h" || command == "hello"
    }
}

fn print_help() {
    println!("Rolodex - a terminal contact book with birthday reminders");
    println!();
    println!("USAGE:");
    println!("  rolodex [COMMAND] [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("  hello                                Print a greeting");
    println!("  add [name] [phone]                   Add a contact or another phone");
    println!("  change [name] [oldphone] [newphone]  Replace a contact's phone");
    println!("  phone [name]                         Show a contact's phones");
    println!("  all                                  List all contacts");
    println!("  add-birthday [name] [DD.MM.YYYY]     Set a contact's birthday");
    println!("  show-birthday [name]                 Show a contact's birthday");
    println!("  birthdays [--days N]                 Show upcoming birthdays");
    println!("  config show|set                      View or modify configuration");
    println!("  help                                 Show this help message");
    println!("  version                              Show version information");
    println!("  close | exit                         Save and exit");
    println!();
    println!("EXAMPLES:");
    println!("  rolodex add Anna 0123456789");
    println!("  rolodex add-birthday Anna 05.03.1990");
    println!("  rolodex birthdays --days 14");
}
