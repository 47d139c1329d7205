use anyhow::Result;
use clap::Parser;

use rolodex::app::Application;
use rolodex::cli::{convert_to_command_args, Cli};

fn main() -> Result<()> {
    rolodex::init_logger();

    let cli = Cli::parse();
    match convert_to_command_args(&cli) {
        Some(args) => Application::new().run_once(args),
        None => rolodex::run(),
    }
}
