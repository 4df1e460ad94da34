//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sentinel for "no birthday recorded", below any real calendar year.
const EMPTY_DATE: NaiveDate = NaiveDate::MIN;

/// A contact's birthday, either a concrete calendar date or an explicit
/// empty sentinel for contacts with no recorded date.
///
/// Accepted input formats: `DD-MM-YYYY`, `DD.MM.YYYY`, `DD/MM/YYYY`.
/// The first of the separators `-`, `.`, `/` found in the string selects
/// the format; a string containing none of them fails construction.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("25.12.1990").unwrap();
/// assert_eq!(birthday.to_string(), "25-12-1990");
/// assert_eq!(Birthday::empty().to_string(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from one of the accepted formats.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if no known separator is
    /// present or the string is not a valid day-month-year date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        let format = if raw.contains('-') {
            "%d-%m-%Y"
        } else if raw.contains('.') {
            "%d.%m.%Y"
        } else if raw.contains('/') {
            "%d/%m/%Y"
        } else {
            return Err(ValidationError::InvalidBirthday(raw));
        };

        let date = NaiveDate::parse_from_str(&raw, format)
            .map_err(|_| ValidationError::InvalidBirthday(raw))?;

        Ok(Self(date))
    }

    /// The "no birthday recorded" sentinel.
    pub fn empty() -> Self {
        Self(EMPTY_DATE)
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.0 == EMPTY_DATE
    }

    /// The underlying date, or `None` for the empty sentinel.
    pub fn date(&self) -> Option<NaiveDate> {
        if self.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }
}

// Serde support - serialize as the rendered string ("" for the sentinel),
// which is also the persisted-file representation.
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation; the empty
// string restores the sentinel.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            Ok(Birthday::empty())
        } else {
            Birthday::new(s).map_err(serde::de::Error::custom)
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "{}", self.0.format("%d-%m-%Y"))
        }
    }
}
