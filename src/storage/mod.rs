//! Binary-file persistence for the address book.
//!
//! The full logical content of the book is rewritten on every save as a
//! bincode-encoded mapping `name -> { phones, birthday }`, where the
//! birthday is the rendered `DD-MM-YYYY` string or `""` for contacts with
//! no recorded date. Restoring rebuilds every record through the same
//! validating constructors as live input, so a corrupted file fails the
//! restore instead of smuggling invalid data into the book.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of one record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    phones: Vec<String>,
    birthday: String,
}

/// Persistence handle bound to a fixed data-file path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the book's logical content to the data file, overwriting
    /// any existing file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when encoding or the write
    /// itself fails.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let mut data: IndexMap<String, StoredRecord> = IndexMap::with_capacity(book.len());
        for record in book.iter() {
            data.insert(
                record.name().as_str().to_string(),
                StoredRecord {
                    phones: record.phones().iter().map(|p| p.to_string()).collect(),
                    birthday: record.birthday().to_string(),
                },
            );
        }

        let bytes =
            bincode::serialize(&data).map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, bytes).map_err(|e| StorageError::Serialization(e.to_string()))?;

        debug!(records = book.len(), path = %self.path.display(), "address book saved");
        Ok(())
    }

    /// Rebuild an address book from the data file.
    ///
    /// A missing file is not an error: it yields an empty book, matching
    /// the first run of the program.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Restore` when the file cannot be read or
    /// decoded, or when a stored field no longer passes validation.
    pub fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(AddressBook::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| StorageError::Restore(e.to_string()))?;
        let data: IndexMap<String, StoredRecord> =
            bincode::deserialize(&bytes).map_err(|e| StorageError::Restore(e.to_string()))?;

        let mut book = AddressBook::new();
        for (name, stored) in data {
            let name =
                ContactName::new(name).map_err(|e| StorageError::Restore(e.to_string()))?;
            let mut record = Record::new(name);

            if !stored.birthday.is_empty() {
                let birthday = Birthday::new(stored.birthday)
                    .map_err(|e| StorageError::Restore(e.to_string()))?;
                record = record.with_birthday(birthday);
            }

            for phone in stored.phones {
                let phone =
                    Phone::new(phone).map_err(|e| StorageError::Restore(e.to_string()))?;
                record.add_phone(phone);
            }

            book.add_record(record);
        }

        debug!(records = book.len(), path = %self.path.display(), "address book restored");
        Ok(book)
    }
}
