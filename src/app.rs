use crate::command_processor::{
    preprocess_input, CommandArgs, CommandContext, CommandProcessor, Flow,
};
use crate::config::Config;
use crate::state::StateManager;
use anyhow::Result;
use rustyline::DefaultEditor;

pub struct Application {
    command_processor: CommandProcessor,
}

impl Application {
    pub fn new() -> Self {
        Self { command_processor: CommandProcessor::new() }
    }

    /// Interactive terminal mode. The book is loaded once at startup
    /// and saved on every path out of the loop, including Ctrl-C and
    /// Ctrl-D at the prompt.
    pub fn run(&self) -> Result<()> {
        log::info!("Starting Rolodex terminal");

        let mut config = Config::load()?;
        let state = StateManager::from_config(&config)?;
        let mut book = state.load_book()?;
        log::debug!("Loaded {} contact(s) from {:?}", book.len(), state.book_path());

        let mut rl = DefaultEditor::new()?;
        println!("Welcome to Rolodex! Type 'help' for commands.");
        let prompt = ">> ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    let input = preprocess_input(&line);
                    if input.is_empty() {
                        continue;
                    }
                    let mut ctx =
                        CommandContext { book: &mut book, config: &mut config };
                    match self.process_input(&input, &mut ctx) {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => {}
                        Err(err) => {
                            log::error!("Failed to process command: {:?}", err);
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        state.save_book(&book)?;
        log::info!("Contact book saved to {:?}", state.book_path());
        Ok(())
    }

    /// One-shot mode: load, execute a single command, save.
    pub fn run_once(&self, args: CommandArgs) -> Result<()> {
        let mut config = Config::load()?;
        let state = StateManager::from_config(&config)?;
        let mut book = state.load_book()?;

        let mut ctx = CommandContext { book: &mut book, config: &mut config };
        self.command_processor.execute(args, &mut ctx)?;

        state.save_book(&book)?;
        Ok(())
    }

    fn process_input(&self, input: &str, ctx: &mut CommandContext) -> Result<Flow> {
        let args = match CommandArgs::parse(input) {
            Ok(args) => args,
            Err(err) => {
                println!("{}", err);
                return Ok(Flow::Continue);
            }
        };
        self.command_processor.execute(args, ctx)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
