//! The contact book: records keyed by name, with validated fields and
//! the upcoming-birthday query.

pub mod fields;
pub mod upcoming;

pub use fields::{Birthday, Name, Phone, BIRTHDAY_FORMAT};
pub use upcoming::{upcoming_birthdays, UpcomingBirthday};

use std::collections::BTreeMap;
use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to the user by contact operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Contact not found: {0}")]
    NotFound(String),
    #[error("{contact} has no phone {phone}")]
    PhoneNotFound { contact: String, phone: String },
    #[error("{0}")]
    InvalidInput(String),
}

/// A single contact. The name is fixed at creation; phones and the
/// birthday are mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self { name, phones: Vec::new(), birthday: None }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`. Returns whether one
    /// was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> Result<(), BookError> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound {
                contact: self.name.to_string(),
                phone: old.to_string(),
            }),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones =
            self.phones.iter().map(Phone::as_str).collect::<Vec<_>>().join("; ");
        let birthday = match self.birthday {
            Some(b) => b.to_string(),
            None => "not set".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: [{}], birthday: [{}]",
            self.name, phones, birthday
        )
    }
}

/// Contacts keyed by name. An ordered map keeps listings and sort
/// tie-breaks deterministic.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday occurrence falls within
    /// `window_days` of today, with weekend occurrences shifted to the
    /// following Monday.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        upcoming::upcoming_birthdays(self, Local::now().date_naive(), window_days)
    }
}
