use anyhow::{anyhow, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::book::AddressBook;
use crate::config::Config;

const STATE_DIR: &str = ".rolodex";
const BOOK_FILE: &str = "contacts.json";
// Maximum allowed size for the book file to prevent DoS attacks (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
// Maximum number of contacts accepted from disk
const MAX_CONTACTS: usize = 10_000;

/// Owns the on-disk location of the contact book. The whole book is
/// loaded at startup and written back in one piece at exit.
pub struct StateManager {
    book_path: PathBuf,
}

impl StateManager {
    pub fn new() -> Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        let state_dir = home_dir.join(STATE_DIR);
        std::fs::create_dir_all(&state_dir)?;
        Ok(Self { book_path: state_dir.join(BOOK_FILE) })
    }

    /// Honors `contacts.book_file` from the config when set, otherwise
    /// falls back to the default location under the home directory.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.contacts.book_file {
            Some(path) => {
                let book_path = PathBuf::from(path);
                if let Some(parent) = book_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Ok(Self { book_path })
            }
            None => Self::new(),
        }
    }

    pub fn book_path(&self) -> &PathBuf {
        &self.book_path
    }

    /// Load the contact book. An absent file is an empty book.
    pub fn load_book(&self) -> Result<AddressBook> {
        if !self.book_path.exists() {
            return Ok(AddressBook::new());
        }

        // Check file size before loading to prevent DoS attacks
        let metadata = std::fs::metadata(&self.book_path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(anyhow!("Contact file exceeds size limits"));
        }

        let file = File::open(&self.book_path)?;
        let reader = BufReader::new(file);
        let book: AddressBook = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Failed to parse contact data: {}", e))?;

        if book.len() > MAX_CONTACTS {
            return Err(anyhow!(
                "Too many contacts in file (maximum {})",
                MAX_CONTACTS
            ));
        }

        Ok(book)
    }

    pub fn save_book(&self, book: &AddressBook) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.book_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, book)?;
        Ok(())
    }
}
