//! AddressBook container: the keyed collection of records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::view::{Page, PageRow};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;

/// The full collection of records, keyed by contact name.
///
/// Keys are unique; adding a record under an existing name silently
/// overwrites the previous entry. Iteration and listing follow insertion
/// order, which also survives the persisted file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Insert a record under its name key, returning the previous record
    /// when the key was already taken (overwrite is silent).
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Remove and return the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record exists under that name.
    pub fn delete_record(&mut self, name: &str) -> BookResult<Record> {
        // shift_remove keeps the insertion order of the survivors.
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// The `", "`-joined phone string for `name`, or `None` when the name
    /// is absent (a reportable outcome, not an error).
    pub fn show_phones(&self, name: &str) -> Option<String> {
        self.records.get(name).map(|r| r.show_phones(", "))
    }

    /// Records whose name or joined phone string contains `search`,
    /// collected into a new book that paginates like any other.
    pub fn find(&self, search: &str) -> AddressBook {
        let mut found = AddressBook::new();
        for record in self.records.values() {
            if record.name().as_str().contains(search)
                || record.show_phones(", ").contains(search)
            {
                found.add_record(record.clone());
            }
        }
        found
    }

    /// Lazy, finite iterator of table pages with up to `page_size` rows
    /// each, evaluated against the current local date.
    ///
    /// The iterator is consumed by a single traversal; call again to
    /// re-iterate the book's current state.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        self.pages_on(page_size, Local::now().date_naive())
    }

    /// [`AddressBook::pages`] with an explicit `today` for the countdown
    /// column.
    pub fn pages_on(&self, page_size: usize, today: NaiveDate) -> Pages<'_> {
        Pages {
            records: self.records.values(),
            page_size: page_size.max(1),
            today,
        }
    }

    /// Materialize the full paginated view.
    pub fn show_all(&self, page_size: usize) -> Vec<Page> {
        self.pages(page_size).collect()
    }
}

/// Iterator over the table pages of an [`AddressBook`].
///
/// A page is emitted once it reaches the page size or the iteration hits
/// the last record, whichever comes first.
pub struct Pages<'a> {
    records: indexmap::map::Values<'a, String, Record>,
    page_size: usize,
    today: NaiveDate,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let mut rows = Vec::with_capacity(self.page_size);
        for record in self.records.by_ref() {
            rows.push(PageRow::for_record(record, self.today));
            if rows.len() == self.page_size {
                break;
            }
        }

        if rows.is_empty() {
            None
        } else {
            Some(Page::new(rows))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactName, Phone};

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(ContactName::new(name).unwrap());
        record.add_phone(Phone::new(phone).unwrap());
        record
    }

    fn book_with(names: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phone) in names {
            book.add_record(record(name, phone));
        }
        book
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Olena", "+380661111111")).is_none());
        let previous = book.add_record(record("Olena", "+380662222222"));
        assert!(previous.is_some());
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.show_phones("Olena").as_deref(),
            Some("+380662222222")
        );
    }

    #[test]
    fn test_delete_record() {
        let mut book = book_with(&[("Olena", "+380661111111")]);
        let removed = book.delete_record("Olena").unwrap();
        assert_eq!(removed.name().as_str(), "Olena");
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_record_fails() {
        let mut book = AddressBook::new();
        let err = book.delete_record("Nobody").unwrap_err();
        assert_eq!(err, BookError::NotFound("Nobody".to_string()));
    }

    #[test]
    fn test_show_phones_missing_name() {
        let book = book_with(&[("Olena", "+380661111111")]);
        assert!(book.show_phones("Ivan").is_none());
    }

    #[test]
    fn test_find_by_name_substring() {
        let book = book_with(&[
            ("Olena", "+380661111111"),
            ("Oleh", "+380662222222"),
            ("Ivan", "+380663333333"),
        ]);
        let found = book.find("Ole");
        assert_eq!(found.len(), 2);
        assert!(found.get("Olena").is_some());
        assert!(found.get("Oleh").is_some());
    }

    #[test]
    fn test_find_by_phone_substring() {
        let book = book_with(&[
            ("Olena", "+380661111111"),
            ("Ivan", "+380663333333"),
        ]);
        let found = book.find("333");
        assert_eq!(found.len(), 1);
        assert!(found.get("Ivan").is_some());
    }

    #[test]
    fn test_find_no_match_is_empty() {
        let book = book_with(&[("Olena", "+380661111111")]);
        assert!(book.find("zzz").is_empty());
    }

    #[test]
    fn test_pagination_six_records_page_size_four() {
        let book = book_with(&[
            ("A", "+380660000001"),
            ("B", "+380660000002"),
            ("C", "+380660000003"),
            ("D", "+380660000004"),
            ("E", "+380660000005"),
            ("F", "+380660000006"),
        ]);
        let pages: Vec<Page> = book.pages_on(4, today()).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 4);
        assert_eq!(pages[1].len(), 2);
        assert_eq!(pages[0].rows()[0].name, "A");
        assert_eq!(pages[1].rows()[1].name, "F");
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let book = book_with(&[
            ("A", "+380660000001"),
            ("B", "+380660000002"),
        ]);
        let pages: Vec<Page> = book.pages_on(2, today()).collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 2);
    }

    #[test]
    fn test_show_all_empty_book() {
        let book = AddressBook::new();
        assert!(book.show_all(4).is_empty());
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut book = book_with(&[
            ("C", "+380660000003"),
            ("A", "+380660000001"),
            ("B", "+380660000002"),
        ]);
        book.delete_record("A").unwrap();
        book.add_record(record("A", "+380660000001"));
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
