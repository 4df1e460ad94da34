//! Contact Assistant - an interactive address book with birthday
//! countdowns and binary-file persistence.
//!
//! The data model stores validated names, phone numbers and birthdays,
//! supports add/change/delete/find operations, computes the days left to
//! each contact's next birthday, and renders paginated tabular listings.
//! The full dataset is rewritten to a local binary file after every
//! mutating command and restored on the next start.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the record and address book containers
//! - **view**: paginated table pages
//! - **storage**: binary-file persistence
//! - **commands**: free-text parsing and command dispatch
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;
pub mod view;

pub use commands::{App, ParsedInput, Response};
pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, PhoneOutcome, Record};
pub use storage::FileStore;
pub use view::{Page, PageRow};
