use clap::{Parser, Subcommand};
use std::collections::HashMap;

use crate::command_processor::CommandArgs;

/// Rolodex - terminal contact book with weekend-aware birthday reminders
#[derive(Debug, Parser)]
#[command(name = "rolodex")]
#[command(about = "Terminal contact book with weekend-aware birthday reminders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive mode)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a greeting
    Hello,

    /// Add a contact, or another phone to an existing contact
    Add {
        /// Contact name (letters only)
        #[arg(required = true)]
        name: String,

        /// Phone number (10 digits)
        #[arg(required = true)]
        phone: String,
    },

    /// Replace one of a contact's phone numbers
    Change {
        /// Contact name
        #[arg(required = true)]
        name: String,

        /// Phone number to replace
        #[arg(required = true)]
        old_phone: String,

        /// Replacement phone number
        #[arg(required = true)]
        new_phone: String,
    },

    /// Show a contact's phone numbers
    Phone {
        /// Contact name
        #[arg(required = true)]
        name: String,
    },

    /// List all contacts
    All,

    /// Set a contact's birthday, creating the contact if needed
    AddBirthday {
        /// Contact name
        #[arg(required = true)]
        name: String,

        /// Birthday in DD.MM.YYYY format
        #[arg(required = true)]
        birthday: String,
    },

    /// Show a contact's birthday
    ShowBirthday {
        /// Contact name
        #[arg(required = true)]
        name: String,
    },

    /// List contacts with birthdays in the upcoming window
    Birthdays {
        /// Lookahead window in days (defaults to the configured value)
        #[arg(long)]
        days: Option<u32>,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show configuration
    #[command(aliases = ["list", "get"])]
    Show {
        /// Key to show (use "all" for all settings)
        key: Option<String>,
    },

    /// Set configuration value
    Set {
        /// Configuration key
        #[arg(required = true)]
        key: String,

        /// Configuration value
        #[arg(required = true)]
        value: String,
    },
}

/// Convert a Clap command to a CommandArgs representation
pub fn convert_to_command_args(cli: &Cli) -> Option<CommandArgs> {
    // If no command specified, return None to handle interactive mode
    let command = match &cli.command {
        Some(cmd) => cmd,
        None => return None,
    };

    let mut args = Vec::new();
    let mut flags = HashMap::new();

    let command_str = match command {
        Commands::Hello => "hello".to_string(),
        Commands::Add { name, phone } => {
            args.push(name.clone());
            args.push(phone.clone());
            "add".to_string()
        }
        Commands::Change { name, old_phone, new_phone } => {
            args.push(name.clone());
            args.push(old_phone.clone());
            args.push(new_phone.clone());
            "change".to_string()
        }
        Commands::Phone { name } => {
            args.push(name.clone());
            "phone".to_string()
        }
        Commands::All => "all".to_string(),
        Commands::AddBirthday { name, birthday } => {
            args.push(name.clone());
            args.push(birthday.clone());
            "add-birthday".to_string()
        }
        Commands::ShowBirthday { name } => {
            args.push(name.clone());
            "show-birthday".to_string()
        }
        Commands::Birthdays { days } => {
            if let Some(days) = days {
                flags.insert("days".to_string(), Some(days.to_string()));
            }
            "birthdays".to_string()
        }
        Commands::Config { action } => {
            match action {
                ConfigActions::Show { key } => {
                    args.push("show".to_string());
                    if let Some(key_name) = key {
                        args.push(key_name.clone());
                    }
                }
                ConfigActions::Set { key, value } => {
                    args.push("set".to_string());
                    args.push(key.clone());
                    args.push(value.clone());
                }
            }
            "config".to_string()
        }
    };

    Some(CommandArgs { command: command_str, args, flags })
}
