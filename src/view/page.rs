//! Paginated table view of the address book.

use crate::models::Record;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Table};
use std::fmt;

const HEADERS: [&str; 4] = ["Name", "Phone Number", "Birthday Date", "Days till birthday"];
const TITLE: &str = "Contacts list";

/// One rendered table row: name, phones stacked one per line, the
/// birthday string, and the days-till-birthday cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub name: String,
    pub phones: String,
    pub birthday: String,
    pub days: String,
}

impl PageRow {
    /// Build the row for a record, evaluating the countdown against
    /// `today`. A countdown of 0 renders as `"Today"`, an unrecorded
    /// birthday as an empty cell.
    pub fn for_record(record: &Record, today: NaiveDate) -> Self {
        let days = match record.days_to_birthday_from(today) {
            Some(0) => "Today".to_string(),
            Some(days) => days.to_string(),
            None => String::new(),
        };

        Self {
            name: record.name().to_string(),
            phones: record.show_phones("\n"),
            birthday: record.birthday().to_string(),
            days,
        }
    }

}

/// One bounded-size batch of rows in the paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    rows: Vec<PageRow>,
}

impl Page {
    pub fn new(rows: Vec<PageRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// Renders the page as a console table; multi-line phone cells expand
// the row height.
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(HEADERS.to_vec());

        for row in &self.rows {
            table.add_row(vec![
                row.name.clone(),
                row.phones.clone(),
                row.birthday.clone(),
                row.days.clone(),
            ]);
        }

        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, ContactName, Phone};

    fn sample_record() -> Record {
        let mut record = Record::new(ContactName::new("Olena").unwrap())
            .with_birthday(Birthday::new("25-12-1990").unwrap());
        record.add_phone(Phone::new("+380661111111").unwrap());
        record.add_phone(Phone::new("+380662222222").unwrap());
        record
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    #[test]
    fn test_row_for_record() {
        let row = PageRow::for_record(&sample_record(), today());
        assert_eq!(row.name, "Olena");
        assert_eq!(row.phones, "+380661111111\n+380662222222");
        assert_eq!(row.birthday, "25-12-1990");
        assert_eq!(row.days, "5");
    }

    #[test]
    fn test_row_days_today_and_empty() {
        let record = Record::new(ContactName::new("Ivan").unwrap())
            .with_birthday(Birthday::new("20-12-1990").unwrap());
        assert_eq!(PageRow::for_record(&record, today()).days, "Today");

        let record = Record::new(ContactName::new("Ivan").unwrap());
        let row = PageRow::for_record(&record, today());
        assert_eq!(row.days, "");
        assert_eq!(row.birthday, "");
    }

    #[test]
    fn test_page_row_accounting() {
        let empty = Page::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let page = Page::new(vec![PageRow::for_record(&sample_record(), today())]);
        assert!(!page.is_empty());
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_page_render_contains_all_cells() {
        let page = Page::new(vec![PageRow::for_record(&sample_record(), today())]);
        let rendered = page.to_string();
        assert!(rendered.contains("Contacts list"));
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Days till birthday"));
        assert!(rendered.contains("Olena"));
        assert!(rendered.contains("+380661111111"));
        assert!(rendered.contains("+380662222222"));
        assert!(rendered.contains("25-12-1990"));
        // The two phones occupy two table lines of the same row.
        let phone_lines = rendered
            .lines()
            .filter(|l| l.contains("+38066"))
            .count();
        assert_eq!(phone_lines, 2);
    }
}
