//! Validated field types for contact records.
//
// Each field is a newtype whose constructor enforces the format rules,
// so a stored value is valid by construction.

use std::fmt;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::BookError;

/// Text format used for birthdays on input and output.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name. Alphabetic characters only, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, BookError> {
        if value.is_empty() || !value.chars().all(char::is_alphabetic) {
            return Err(BookError::InvalidInput(
                "Name must contain only letters".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Phone number. Exactly 10 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, BookError> {
        let re = Regex::new(r"^[0-9]{10}$").unwrap();
        if !re.is_match(value) {
            return Err(BookError::InvalidInput(
                "Phone must contain exactly 10 digits".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birthday. A valid calendar date; only month and day matter for
/// recurrence, the year is kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse from `DD.MM.YYYY`. Rejects malformed text and impossible
    /// dates (e.g. `31.02.2000`).
    pub fn parse(value: &str) -> Result<Self, BookError> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| {
                BookError::InvalidInput(
                    "Birthday must be a valid date in format DD.MM.YYYY".to_string(),
                )
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
