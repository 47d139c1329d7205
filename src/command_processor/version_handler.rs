//! Version command handler for Rolodex
//!
//! Handles version-related commands.

use super::{CommandArgs, CommandContext, CommandHandler, Flow};
use anyhow::Result;

#[derive(Debug)]
pub struct VersionHandler;

impl CommandHandler for VersionHandler {
    fn execute(&self, _args: &CommandArgs, _ctx: &mut CommandContext) -> Result<Flow> {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        println!("Rolodex v{}", VERSION);
        println!("A terminal contact book with weekend-aware birthday reminders.");
        Ok(Flow::Continue)
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "version" || command == "--version" || command == "-v"
    }
}
