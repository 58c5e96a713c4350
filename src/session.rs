//! Interactive menu session.
//!
//! The session owns the registry and the console and moves through a small
//! state machine: the menu prompt dispatches to the add flow or the show flow,
//! and both flows always return to the menu whatever their outcome. Problems
//! inside a flow are reported to the user and never end the session; only the
//! exit option (or running out of input) does.

use std::io::{BufRead, Write};

use crate::config::SessionSettings;
use crate::console::{Console, Tone};
use crate::core::validation::SUBJECT_COUNT;
use crate::error::{Result, ResultsError};
use crate::logging;
use crate::record::StudentRecord;
use crate::registry::StudentRegistry;

pub const MENU: &str = "===== Student Result Management System =====\n\
                        1. Add Student\n\
                        2. Show Student Details\n\
                        3. Exit";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const EXIT_MESSAGE: &str = "Exiting program. Thank you!";
pub const INPUT_ERROR_MESSAGE: &str =
    "Input error: expected an integer. Clearing input and returning to main menu...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuPrompt,
    AddFlow,
    ShowFlow,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ShowStudent,
    Exit,
}

impl MenuChoice {
    pub fn from_number(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::AddStudent),
            2 => Some(Self::ShowStudent),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Session<R: BufRead, W: Write> {
    console: Console<R, W>,
    registry: StudentRegistry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: &SessionSettings) -> Self {
        Self {
            console: Console::new(input, output, settings.color),
            registry: StudentRegistry::with_capacity(settings.capacity),
        }
    }

    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    pub fn find_by_roll(&self, roll: i32) -> Option<usize> {
        self.registry.find_by_roll(roll)
    }

    /// Runs the menu loop to completion, then releases the console.
    pub fn run(&mut self) -> Result<()> {
        logging::log_session_start(self.registry.capacity());

        let outcome = self.menu_loop();
        let closed = self.console.close();

        logging::log_session_end(self.registry.len(), "menu loop finished");
        outcome.and(closed)
    }

    fn menu_loop(&mut self) -> Result<()> {
        let mut state = SessionState::MenuPrompt;
        loop {
            state = match state {
                SessionState::MenuPrompt => self.menu_prompt()?,
                SessionState::AddFlow => {
                    self.add_student()?;
                    SessionState::MenuPrompt
                }
                SessionState::ShowFlow => {
                    self.show_student_details()?;
                    SessionState::MenuPrompt
                }
                SessionState::Exit => return Ok(()),
            };
        }
    }

    /// Shows the menu and reads one choice.
    pub fn menu_prompt(&mut self) -> Result<SessionState> {
        self.console.say(MENU)?;
        self.console.prompt(CHOICE_PROMPT)?;

        let choice = match self.console.read_int() {
            Ok(choice) => choice,
            Err(ResultsError::InvalidInteger { .. }) => {
                self.console.say_with(
                    "Invalid choice. Please enter an integer between 1 and 3.",
                    Tone::Failure,
                )?;
                return Ok(SessionState::MenuPrompt);
            }
            Err(ResultsError::InputClosed) => {
                tracing::debug!("Input ended at the menu prompt");
                return Ok(SessionState::Exit);
            }
            Err(e) => return Err(e),
        };

        let next = match MenuChoice::from_number(choice) {
            Some(MenuChoice::AddStudent) => SessionState::AddFlow,
            Some(MenuChoice::ShowStudent) => SessionState::ShowFlow,
            Some(MenuChoice::Exit) => {
                self.console.say(EXIT_MESSAGE)?;
                SessionState::Exit
            }
            None => {
                self.console.say_with(
                    "Invalid option. Please select 1, 2 or 3.",
                    Tone::Failure,
                )?;
                SessionState::MenuPrompt
            }
        };
        Ok(next)
    }

    /// Interactive add flow. Failures are reported and leave the registry as it was.
    pub fn add_student(&mut self) -> Result<()> {
        match self.read_and_insert_student() {
            Ok(()) => self.console.say_with(
                "Student added successfully. Returning to main menu...",
                Tone::Success,
            ),
            Err(err) => {
                logging::log_rejection("add_student", &err.to_string());
                let line = match &err {
                    ResultsError::Validation(_) => {
                        format!("Error: {err} Returning to main menu...")
                    }
                    ResultsError::DuplicateRoll { .. }
                    | ResultsError::EmptyName
                    | ResultsError::StorageFull { .. } => format!("Error: {err}"),
                    ResultsError::InvalidInteger { .. } => INPUT_ERROR_MESSAGE.to_string(),
                    _ => format!("An unexpected error occurred: {err}"),
                };
                self.console.say_with(&line, Tone::Failure)
            }
        }
    }

    fn read_and_insert_student(&mut self) -> Result<()> {
        self.console.prompt("Enter Roll Number: ")?;
        let roll = self.console.read_int()?;

        if self.registry.contains(roll) {
            return Err(ResultsError::duplicate_roll(roll));
        }

        self.console.prompt("Enter Student Name: ")?;
        let name = self.console.read_line()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ResultsError::EmptyName);
        }

        let mut marks = [0; SUBJECT_COUNT];
        for (i, mark) in marks.iter_mut().enumerate() {
            self.console
                .prompt(&format!("Enter marks for subject {}: ", i + 1))?;
            *mark = self.console.read_int()?;
        }

        let record = StudentRecord::new(roll, name, &marks)?;
        let status = record.status();
        self.registry.insert(record)?;

        logging::log_record_added(roll, &status.to_string(), self.registry.len());
        Ok(())
    }

    /// Looks a student up by roll number and prints their result block.
    pub fn show_student_details(&mut self) -> Result<()> {
        match self.lookup_and_display() {
            Ok(()) => self.console.say("Search completed."),
            Err(err) => {
                let (line, tone) = match &err {
                    ResultsError::NotFound { .. } => (err.to_string(), Tone::Plain),
                    ResultsError::InvalidInteger { .. } => {
                        (INPUT_ERROR_MESSAGE.to_string(), Tone::Failure)
                    }
                    _ => (format!("An error occurred: {err}"), Tone::Failure),
                };
                self.console.say_with(&line, tone)
            }
        }
    }

    fn lookup_and_display(&mut self) -> Result<()> {
        self.console.prompt("Enter Roll Number to search: ")?;
        let roll = self.console.read_int()?;

        let record = self.registry.get(roll);
        logging::log_lookup(roll, record.is_some());

        let record = record.ok_or_else(|| ResultsError::not_found(roll))?;
        record.display(self.console.output_mut())?;
        Ok(())
    }
}
