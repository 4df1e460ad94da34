//! Tabular presentation of address book listings.

pub mod page;

pub use page::{Page, PageRow};
