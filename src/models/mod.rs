//! Data models: records and the address book container.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages};
pub use record::{PhoneOutcome, Record};
