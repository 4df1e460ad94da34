//! Free-text command parsing and dispatch.
//!
//! This is the glue between the terminal and the data model: it splits a
//! line of user input into a command plus positional fields, runs the
//! matching handler, converts every error kind into its fixed user-facing
//! message, and saves the book after each mutating command. The data model
//! itself never prints and never formats user messages.

use crate::config::Config;
use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use crate::error::{BookError, CommandError, StorageError};
use crate::models::{AddressBook, PhoneOutcome, Record};
use crate::storage::FileStore;
use tracing::info;

/// Every recognized command, including the two-word ones.
pub const COMMANDS: [&str; 10] = [
    "hello", "add", "change", "delete", "phone", "show all", "find", "good bye", "close", "exit",
];

const EXIT_COMMANDS: [&str; 3] = ["good bye", "close", "exit"];
const MUTATING_COMMANDS: [&str; 3] = ["add", "change", "delete"];

const MSG_UNRECOGNIZED: &str = "Can not recognize a command! Please, try again.";
const MSG_NO_RECORDS: &str = "Can't find records in the address book!";
const MSG_PHONE_FORMAT: &str = "Phone number must be in format '+[country][area][number]'. \
     Examples: '+380661234567' or '+442012345678'";
const MSG_BIRTHDAY_FORMAT: &str =
    "Date of birth must be one of the formats: 'DD-MM-YYYY', 'DD.MM.YYYY' or 'DD/MM/YYYY'";
const MSG_WRITE_FAILED: &str = "Can't write the data file! Something went wrong!";
const MSG_READ_FAILED: &str = "Can't read the data file! Something went wrong!";

/// A structured request: the recognized command plus its positional
/// fields. Field meaning is positional: name, phone, then either the
/// replacement phone (for `change`) or the birthday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub new_phone: Option<String>,
    pub birthday: Option<String>,
}

impl ParsedInput {
    /// Split a raw input line into a command and positional fields.
    ///
    /// Two-word commands (`show all`, `good bye`) are recognized before
    /// single-word ones. An unknown leading word leaves `command` unset.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut input = Self::default();

        let mut rest: &[&str] = &tokens;
        if tokens.len() >= 2 {
            let two_word = format!("{} {}", tokens[0], tokens[1]).to_lowercase();
            if COMMANDS.contains(&two_word.as_str()) {
                input.command = Some(two_word);
                rest = &tokens[2..];
            }
        }
        if input.command.is_none() {
            if let Some(first) = tokens.first() {
                let one_word = first.to_lowercase();
                if COMMANDS.contains(&one_word.as_str()) {
                    input.command = Some(one_word);
                    rest = &tokens[1..];
                }
            }
        }
        if input.command.is_none() {
            return input;
        }

        let is_change = input.command.as_deref() == Some("change");
        input.name = rest.first().map(|s| s.to_string());
        input.phone = rest.get(1).map(|s| s.to_string());
        if is_change {
            input.new_phone = rest.get(2).map(|s| s.to_string());
            input.birthday = rest.get(3).map(|s| s.to_string());
        } else {
            input.birthday = rest.get(2).map(|s| s.to_string());
        }

        input
    }

    fn require(field: &Option<String>, label: &'static str) -> Result<String, CommandError> {
        field.clone().ok_or(CommandError::MissingField(label))
    }
}

/// The reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub exit: bool,
}

/// Anything a handler can fail with; each variant maps to one fixed
/// user-facing message.
#[derive(Debug)]
enum HandlerError {
    Validation(ValidationError),
    Command(CommandError),
    Book(BookError),
    Storage(StorageError),
}

impl From<ValidationError> for HandlerError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<CommandError> for HandlerError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<BookError> for HandlerError {
    fn from(err: BookError) -> Self {
        Self::Book(err)
    }
}

impl From<StorageError> for HandlerError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl HandlerError {
    fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::InvalidPhone(_)) => MSG_PHONE_FORMAT.to_string(),
            Self::Validation(ValidationError::InvalidBirthday(_)) => {
                MSG_BIRTHDAY_FORMAT.to_string()
            }
            Self::Validation(ValidationError::EmptyName) => "You must enter 'name'".to_string(),
            Self::Command(CommandError::UnknownCommand) => MSG_UNRECOGNIZED.to_string(),
            Self::Command(err) => err.to_string(),
            Self::Book(BookError::NotFound(name)) => format!("Can't find name '{}'", name),
            Self::Storage(StorageError::Serialization(_)) => MSG_WRITE_FAILED.to_string(),
            Self::Storage(StorageError::Restore(_)) => MSG_READ_FAILED.to_string(),
        }
    }
}

/// The interactive application: the address book, its backing file, and
/// the dispatch over the command set.
pub struct App {
    book: AddressBook,
    store: FileStore,
    page_size: usize,
}

impl App {
    pub fn new(store: FileStore, page_size: usize) -> Self {
        Self {
            book: AddressBook::new(),
            store,
            page_size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FileStore::new(&config.data_path), config.page_size)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Replace the in-memory book with the persisted one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Restore` when the data file exists but
    /// cannot be decoded.
    pub fn restore(&mut self) -> Result<(), StorageError> {
        self.book = self.store.load()?;
        info!(records = self.book.len(), "address book loaded");
        Ok(())
    }

    /// Handle one line of user input and produce the reply.
    ///
    /// Mutating commands persist the book before reporting success; any
    /// failure is converted to its fixed message and the loop continues.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let input = ParsedInput::parse(line);
        // Unrecognized input leaves the command unset and falls through to
        // the dispatch catchall.
        let command = input.command.clone().unwrap_or_default();

        let result = self.dispatch(&command, &input).and_then(|text| {
            if MUTATING_COMMANDS.contains(&command.as_str()) {
                self.store.save(&self.book)?;
            }
            Ok(text)
        });

        Response {
            text: result.unwrap_or_else(|err| err.user_message()),
            exit: EXIT_COMMANDS.contains(&command.as_str()),
        }
    }

    fn dispatch(&mut self, command: &str, input: &ParsedInput) -> Result<String, HandlerError> {
        match command {
            "hello" => Ok("How can I help you?".to_string()),
            "add" => self.handle_add(input),
            "change" => self.handle_change(input),
            "delete" => self.handle_delete(input),
            "phone" => self.handle_phone(input),
            "show all" => Ok(self.render_pages(&self.book)),
            "find" => self.handle_find(input),
            "good bye" | "close" | "exit" => Ok("Good bye!".to_string()),
            _ => Err(CommandError::UnknownCommand.into()),
        }
    }

    fn handle_add(&mut self, input: &ParsedInput) -> Result<String, HandlerError> {
        let name = ParsedInput::require(&input.name, "name")?;
        let phone = Phone::new(ParsedInput::require(&input.phone, "phone")?)?;

        if let Some(record) = self.book.get_mut(&name) {
            let outcome = record.add_phone(phone);
            return Ok(phone_message(record, &outcome));
        }

        let mut record = Record::new(ContactName::new(name)?);
        if let Some(birthday) = &input.birthday {
            record = record.with_birthday(Birthday::new(birthday.clone())?);
        }
        record.add_phone(phone);

        let rendered = record.to_string();
        self.book.add_record(record);
        Ok(format!("Successfully added record '{}'", rendered))
    }

    fn handle_change(&mut self, input: &ParsedInput) -> Result<String, HandlerError> {
        let name = ParsedInput::require(&input.name, "name")?;
        let old = Phone::new(ParsedInput::require(&input.phone, "phone")?)?;
        let new = Phone::new(ParsedInput::require(&input.new_phone, "new_phone")?)?;

        let Some(record) = self.book.get_mut(&name) else {
            return Err(BookError::NotFound(name).into());
        };
        let outcome = record.change_phone(&old, new);
        Ok(phone_message(record, &outcome))
    }

    fn handle_delete(&mut self, input: &ParsedInput) -> Result<String, HandlerError> {
        let name = ParsedInput::require(&input.name, "name")?;
        let removed = self.book.delete_record(&name)?;
        Ok(format!("Successfully deleted record '{}'", removed))
    }

    fn handle_phone(&mut self, input: &ParsedInput) -> Result<String, HandlerError> {
        let name = ParsedInput::require(&input.name, "name")?;
        Ok(match self.book.show_phones(&name) {
            Some(phones) => format!("Successfully found numbers '{}' with name '{}'", phones, name),
            None => format!("Can't find number with name '{}'", name),
        })
    }

    fn handle_find(&mut self, input: &ParsedInput) -> Result<String, HandlerError> {
        let search = ParsedInput::require(&input.name, "name")?;
        let found = self.book.find(&search);
        Ok(self.render_pages(&found))
    }

    fn render_pages(&self, book: &AddressBook) -> String {
        let pages = book.show_all(self.page_size);
        if pages.is_empty() {
            return MSG_NO_RECORDS.to_string();
        }
        pages
            .iter()
            .map(|page| page.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a phone mutation outcome as its confirmation message.
fn phone_message(record: &Record, outcome: &PhoneOutcome) -> String {
    match outcome {
        PhoneOutcome::Added(phone) => {
            format!(
                "Successfully added phone '{}' to name '{}'",
                phone,
                record.name()
            )
        }
        PhoneOutcome::AlreadyPresent(phone) => {
            format!("Phone '{}' is already in record '{}'", phone, record)
        }
        PhoneOutcome::NotFound(phone) => {
            format!("There is no phone '{}' in record '{}'", phone, record)
        }
        PhoneOutcome::Changed { old, new } => {
            format!("Successfully changed phone '{}' to '{}'", old, new)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_word_command() {
        let input = ParsedInput::parse("add Olena +380661234567 25-12-1990");
        assert_eq!(input.command.as_deref(), Some("add"));
        assert_eq!(input.name.as_deref(), Some("Olena"));
        assert_eq!(input.phone.as_deref(), Some("+380661234567"));
        assert_eq!(input.birthday.as_deref(), Some("25-12-1990"));
        assert_eq!(input.new_phone, None);
    }

    #[test]
    fn test_parse_change_positions() {
        let input = ParsedInput::parse("change Olena +380661111111 +380662222222");
        assert_eq!(input.command.as_deref(), Some("change"));
        assert_eq!(input.phone.as_deref(), Some("+380661111111"));
        assert_eq!(input.new_phone.as_deref(), Some("+380662222222"));
        assert_eq!(input.birthday, None);
    }

    #[test]
    fn test_parse_two_word_commands() {
        assert_eq!(
            ParsedInput::parse("show all").command.as_deref(),
            Some("show all")
        );
        assert_eq!(
            ParsedInput::parse("Good Bye").command.as_deref(),
            Some("good bye")
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ParsedInput::parse("HELLO").command.as_deref(), Some("hello"));
        assert_eq!(
            ParsedInput::parse("Add Olena +380661234567")
                .command
                .as_deref(),
            Some("add")
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let input = ParsedInput::parse("frobnicate everything");
        assert_eq!(input.command, None);
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(ParsedInput::parse("   "), ParsedInput::default());
    }

    #[test]
    fn test_unknown_input_reports_unrecognized() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(FileStore::new(dir.path().join("phonebook.bin")), 4);

        for line in ["frobnicate everything", "", "   "] {
            let response = app.handle_line(line);
            assert_eq!(response.text, MSG_UNRECOGNIZED, "line: {:?}", line);
            assert!(!response.exit);
        }
        assert!(app.book().is_empty());
    }
}
