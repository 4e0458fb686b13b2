// UI layer: renders the menu and listings and reads user answers.
// Answers come through a `Prompt`, so the same code drives a real terminal
// (via `dialoguer`) or a scripted reader. Nothing here touches the data
// file; the loop in `app` decides what to do with each answer.

use crossterm::style::Stylize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::io::{self, BufRead, Stdout, Write};
use std::time::Duration;

use crate::error::RegistrationError;
use crate::model::{validate_first_name, validate_last_name, RecordStore, StudentRecord};

pub const MENU: &str = concat!(
    "---- Course Registration Program ----\n",
    "  Select from the following menu:  \n",
    "    1. Register a Student for a Course.\n",
    "    2. Show current data.  \n",
    "    3. Save data to a file.\n",
    "    4. Exit the program.\n",
    "----------------------------------------- ",
);

pub const SEPARATOR_WIDTH: usize = 50;

pub const MENU_PROMPT: &str = "Enter your menu choice number";
pub const FIRST_NAME_PROMPT: &str = "Enter the student's first name";
pub const LAST_NAME_PROMPT: &str = "Enter the student's last name";
pub const COURSE_PROMPT: &str = "Please enter the name of the course";

pub const INVALID_CHOICE_MESSAGE: &str = "Please, choose only 1, 2, 3, or 4";
pub const INVALID_VALUE_MESSAGE: &str = "Error: One of the values was not of the correct type!";
pub const READ_FAILED_MESSAGE: &str = "Error: There was a problem with reading the file.";
pub const WRITE_FAILED_MESSAGE: &str = "Error: There was a problem with writing to the file.\n\
Please check that the file is not open by another program.";
pub const TECHNICAL_HEADER: &str = "-- Technical Error Message -- ";
pub const GOODBYE_MESSAGE: &str = "Program Ended";

/// The four menu actions plus the sentinel for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Classify a raw answer. Only the exact digits "1" to "4" are valid;
    /// surrounding whitespace makes the answer invalid.
    pub fn classify(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Register,
            "2" => MenuChoice::Show,
            "3" => MenuChoice::Save,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Source of answers to console questions.
pub trait Prompt {
    /// Ask one question and return the answer without its line terminator.
    /// `out` is the console's output sink, flushed before waiting on input.
    fn ask(&mut self, out: &mut dyn Write, label: &str) -> io::Result<String>;
}

/// Reads one line per question from any `BufRead`. The label is echoed
/// to the output sink as `"<label>: "`. End of input is an error.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        LinePrompt { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, out: &mut dyn Write, label: &str) -> io::Result<String> {
        write!(out, "{}: ", label)?;
        out.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Keyboard prompt on a real terminal using `dialoguer::Input`.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, out: &mut dyn Write, label: &str) -> io::Result<String> {
        out.flush()?;
        // Empty answers are allowed so classification stays with the caller.
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
    }
}

/// Console I/O for the registration menu.
pub struct Console<P, W> {
    prompt: P,
    out: W,
    color: bool,
    interactive: bool,
}

impl<R: BufRead, W: Write> Console<LinePrompt<R>, W> {
    /// Console reading answers line by line from `reader`; no colour, no
    /// spinner. Used for piped input and in tests.
    pub fn scripted(reader: R, out: W) -> Self {
        Console {
            prompt: LinePrompt::new(reader),
            out,
            color: false,
            interactive: false,
        }
    }
}

impl Console<TerminalPrompt, Stdout> {
    /// Console attached to the user's terminal.
    pub fn terminal(color: bool) -> Self {
        Console {
            prompt: TerminalPrompt,
            out: io::stdout(),
            color,
            interactive: true,
        }
    }
}

impl<P: Prompt, W: Write> Console<P, W> {
    /// Turn coloured error headlines on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.prompt.ask(&mut self.out, label)
    }

    /// Print the menu banner with a blank line above and below.
    pub fn render_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", MENU)?;
        writeln!(self.out)
    }

    /// Prompt once and classify the answer. An invalid answer is reported
    /// here and returned as `MenuChoice::Invalid`; re-prompting is up to
    /// the caller.
    pub fn read_menu_choice(&mut self) -> io::Result<MenuChoice> {
        let answer = self.ask(MENU_PROMPT)?;
        let choice = MenuChoice::classify(&answer);
        if choice == MenuChoice::Invalid {
            log::warn!("Rejected menu input {:?}", answer);
            self.show_error(INVALID_CHOICE_MESSAGE, None)?;
        }
        Ok(choice)
    }

    /// Ask for first name, last name and course, in that order. Each name
    /// is checked as soon as it is entered, so a bad first name ends the
    /// exchange before the last name is asked for. On success a
    /// confirmation is printed and the record is returned to be appended.
    pub fn read_new_registration(&mut self) -> Result<StudentRecord, RegistrationError> {
        let first_name = self.ask(FIRST_NAME_PROMPT)?;
        validate_first_name(&first_name)?;
        let last_name = self.ask(LAST_NAME_PROMPT)?;
        validate_last_name(&last_name)?;
        let course_name = self.ask(COURSE_PROMPT)?;

        let record = StudentRecord::new(first_name, last_name, course_name)?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "You have registered {} for {}.",
            record.full_name(),
            record.course_name
        )?;
        Ok(record)
    }

    /// Separator, one line per record in store order, separator.
    pub fn render_registrations(&mut self, store: &RecordStore) -> io::Result<()> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        writeln!(self.out, "{}", separator)?;
        for record in store.iter() {
            writeln!(self.out, "{}", record)?;
        }
        writeln!(self.out, "{}", separator)
    }

    /// Print a user-facing message followed by a blank line. When `error`
    /// is given, its message and every underlying cause are printed below
    /// a technical header.
    pub fn show_error(&mut self, message: &str, error: Option<&dyn Error>) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", message.red())?;
        } else {
            writeln!(self.out, "{}", message)?;
        }
        writeln!(self.out)?;
        if let Some(error) = error {
            writeln!(self.out, "{}", TECHNICAL_HEADER)?;
            writeln!(self.out, "{}", error)?;
            let mut cause = error.source();
            while let Some(inner) = cause {
                writeln!(self.out, "{}", inner)?;
                cause = inner.source();
            }
        }
        Ok(())
    }

    /// Print a plain line of text.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Spinner shown while a blocking operation runs. Hidden unless the
    /// console is attached to a terminal.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if !self.interactive {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn console(input: &str) -> Console<LinePrompt<&[u8]>, Vec<u8>> {
        Console::scripted(input.as_bytes(), Vec::new())
    }

    fn text(console: &Console<LinePrompt<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn classify_accepts_only_exact_digits() {
        assert_eq!(MenuChoice::classify("1"), MenuChoice::Register);
        assert_eq!(MenuChoice::classify("2"), MenuChoice::Show);
        assert_eq!(MenuChoice::classify("3"), MenuChoice::Save);
        assert_eq!(MenuChoice::classify("4"), MenuChoice::Exit);
        for bad in ["0", "5", " 1", "1 ", "", "one", "12", "-1"] {
            assert_eq!(MenuChoice::classify(bad), MenuChoice::Invalid, "{bad:?}");
        }
    }

    #[test]
    fn menu_is_surrounded_by_blank_lines() {
        let mut c = console("");
        c.render_menu().unwrap();
        let out = text(&c);
        assert!(out.starts_with("\n---- Course Registration Program ----\n"));
        assert!(out.contains("    4. Exit the program.\n"));
        assert!(out.contains("  Select from the following menu:  \n"));
        assert!(out.contains("    2. Show current data.  \n"));
        assert!(out.ends_with("----------------------------------------- \n\n"));
    }

    #[test]
    fn invalid_choice_is_reported_and_returned() {
        let mut c = console("7\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Invalid);
        let out = text(&c);
        assert!(out.starts_with("Enter your menu choice number: "));
        assert!(out.contains("Please, choose only 1, 2, 3, or 4\n\n"));
        assert!(!out.contains(TECHNICAL_HEADER));
    }

    #[test]
    fn valid_choice_prints_no_error() {
        let mut c = console("2\r\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Show);
        assert_eq!(text(&c), "Enter your menu choice number: ");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut c = console("");
        let err = c.read_menu_choice().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn registration_returns_record_and_confirms() {
        let mut c = console("Ann\nLee\nAlgebra\n");
        let record = c.read_new_registration().unwrap();
        assert_eq!(record, StudentRecord::new("Ann", "Lee", "Algebra").unwrap());
        let out = text(&c);
        assert!(out.contains("Enter the student's first name: "));
        assert!(out.contains("Enter the student's last name: "));
        assert!(out.contains("Please enter the name of the course: "));
        assert!(out.ends_with("\nYou have registered Ann Lee for Algebra.\n"));
    }

    #[test]
    fn bad_first_name_stops_before_last_name() {
        let mut c = console("Ann5\nLee\nAlgebra\n");
        let err = c.read_new_registration().unwrap_err();
        assert!(matches!(err, RegistrationError::Invalid(ValidationError::FirstName)));
        assert!(!text(&c).contains(LAST_NAME_PROMPT));
    }

    #[test]
    fn bad_last_name_stops_before_course() {
        let mut c = console("Ann\nLee Jr\nAlgebra\n");
        let err = c.read_new_registration().unwrap_err();
        assert!(matches!(err, RegistrationError::Invalid(ValidationError::LastName)));
        assert!(!text(&c).contains(COURSE_PROMPT));
    }

    #[test]
    fn empty_store_renders_only_separators() {
        let mut c = console("");
        c.render_registrations(&RecordStore::new()).unwrap();
        let line = "-".repeat(50);
        assert_eq!(text(&c), format!("{line}\n{line}\n"));
    }

    #[test]
    fn registrations_render_in_store_order() {
        let mut c = console("");
        let store = RecordStore::from(vec![
            StudentRecord::new("Ann", "Lee", "Algebra").unwrap(),
            StudentRecord::new("Bob", "Ray", "Biology").unwrap(),
        ]);
        c.render_registrations(&store).unwrap();
        let out = text(&c);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1..3],
            [
                "Student Ann Lee is enrolled in Algebra",
                "Student Bob Ray is enrolled in Biology"
            ]
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn color_console_styles_the_headline() {
        // crossterm drops styling on its own when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let mut c = console("").with_color(true);
        c.show_error(INVALID_CHOICE_MESSAGE, None).unwrap();
        let out = text(&c);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains(INVALID_CHOICE_MESSAGE));
    }

    #[test]
    fn plain_console_writes_no_escape_codes() {
        let mut c = console("").with_color(false);
        c.show_error(INVALID_CHOICE_MESSAGE, None).unwrap();
        assert_eq!(text(&c), "Please, choose only 1, 2, 3, or 4\n\n");
    }

    #[test]
    fn technical_block_lists_error_chain() {
        let mut c = console("");
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = crate::error::PersistenceError::Write {
            path: "Enrollments.json".into(),
            source: inner,
        };
        c.show_error(WRITE_FAILED_MESSAGE, Some(&err)).unwrap();
        assert_eq!(
            text(&c),
            "Error: There was a problem with writing to the file.\n\
             Please check that the file is not open by another program.\n\
             \n\
             -- Technical Error Message -- \n\
             could not write Enrollments.json\n\
             access denied\n"
        );
    }
}
