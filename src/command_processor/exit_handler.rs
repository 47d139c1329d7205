//! Exit command handler for Rolodex
//!
//! Handles the close, exit, and quit commands. Ends the session via
//! `Flow::Exit` so the application can save the book before the
//! process terminates.

use super::{CommandArgs, CommandContext, CommandHandler, Flow};
use anyhow::Result;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: &CommandArgs, _ctx: &mut CommandContext) -> Result<Flow> {
        println!("Good bye!");
        Ok(Flow::Exit)
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "close" || command == "exit" || command == "quit"
    }
}
