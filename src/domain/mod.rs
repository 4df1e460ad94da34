//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the address book's field
//! values: contact names, phone numbers, and birthdays. These value objects
//! validate at construction time, so invalid data can never be represented
//! inside a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::Phone;
