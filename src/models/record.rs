//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Informational result of a phone mutation on a [`Record`].
///
/// These are successful, reportable outcomes, not errors: adding a phone
/// that is already present leaves the record untouched and reports
/// `AlreadyPresent` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneOutcome {
    /// The phone was appended to the record.
    Added(Phone),

    /// An equal-valued phone already exists; nothing was changed.
    AlreadyPresent(Phone),

    /// The phone to replace is not in the record.
    NotFound(Phone),

    /// `old` was replaced by `new` at its original position.
    Changed { old: Phone, new: Phone },
}

/// A contact: one name, an ordered collection of distinct phones, and one
/// (possibly empty) birthday.
///
/// The name is the record's immutable identity. The phone collection keeps
/// insertion order and never contains two entries with equal string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    birthday: Birthday,
}

impl Record {
    /// Create a record with no phones and no recorded birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: Birthday::empty(),
        }
    }

    /// Set the birthday (builder style).
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Append a phone, unless an equal-valued one is already present.
    pub fn add_phone(&mut self, phone: Phone) -> PhoneOutcome {
        if self.phones.contains(&phone) {
            PhoneOutcome::AlreadyPresent(phone)
        } else {
            self.phones.push(phone.clone());
            PhoneOutcome::Added(phone)
        }
    }

    /// Replace `old` with `new`, keeping `old`'s position.
    ///
    /// Reports `NotFound` if `old` is absent and `AlreadyPresent` if `new`
    /// is already in the record (the no-duplicates invariant forbids the
    /// overwrite).
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> PhoneOutcome {
        let Some(index) = self.phones.iter().position(|p| p == old) else {
            return PhoneOutcome::NotFound(old.clone());
        };
        if self.phones.contains(&new) {
            return PhoneOutcome::AlreadyPresent(new);
        }

        self.phones[index] = new.clone();
        PhoneOutcome::Changed {
            old: old.clone(),
            new,
        }
    }

    /// Join the phones in insertion order with the given separator.
    ///
    /// Used with `", "` for single-line display and `"\n"` for table cells.
    pub fn show_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Days remaining until the next birthday anniversary, `None` when no
    /// birthday is recorded.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Pure form of [`Record::days_to_birthday`] evaluated against an
    /// explicit `today`.
    ///
    /// If this year's occurrence of the birthday is still ahead, the result
    /// is the distance to it; on the day itself it is 0; once it has
    /// passed, the result is the distance to next year's occurrence minus
    /// one day.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birth = self.birthday.date()?;

        let current = occurrence_in_year(birth, today.year());
        if current > today {
            Some((current - today).num_days())
        } else if current < today {
            let next = occurrence_in_year(birth, today.year() + 1);
            Some((next - today).num_days() - 1)
        } else {
            Some(0)
        }
    }
}

/// The birthday's occurrence in `year`. A Feb 29 birth date clamps to
/// Feb 28 in non-leap years.
fn occurrence_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("clamped date is valid")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!(
            "{} {} {}",
            self.name,
            self.show_phones(", "),
            self.birthday
        );
        write!(f, "{}", rendered.trim())
    }
}
