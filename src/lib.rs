pub mod app;
pub mod book;
pub mod cli;
pub mod command_processor;
pub mod config;
pub mod state;

use anyhow::Result;
use log::*;

/// Run the interactive terminal application.
pub fn run() -> Result<()> {
    let app = app::Application::new();
    info!("Initializing Rolodex application");
    app.run()
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use book::{AddressBook, Record};
pub use config::Config;
