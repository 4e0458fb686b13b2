// Application loop: load once, then show the menu and dispatch on the
// user's choice until Exit. Persistence and validation failures are
// printed and the loop carries on; only a broken console ends it early.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::error::RegistrationError;
use crate::model::RecordStore;
use crate::storage;
use crate::ui::{
    Console, MenuChoice, Prompt, GOODBYE_MESSAGE, INVALID_VALUE_MESSAGE, READ_FAILED_MESSAGE,
    WRITE_FAILED_MESSAGE,
};

/// Loop state. `Terminated` is only reached through the Exit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// Owns the console, the in-memory store and the data file path for the
/// whole session. Nothing is saved unless the user picks Save.
pub struct App<P, W> {
    console: Console<P, W>,
    store: RecordStore,
    path: PathBuf,
    state: State,
}

impl<P: Prompt, W: std::io::Write> App<P, W> {
    /// Make the single load attempt and enter `Running`. A missing file
    /// prints a notice; an unreadable one prints an error. Either way the
    /// session starts with an empty store.
    pub fn start(mut console: Console<P, W>, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let store = match storage::load(&path) {
            Ok(Some(store)) => store,
            Ok(None) => {
                console.notice(&format!("File '{}' not found.", path.display()))?;
                RecordStore::new()
            }
            Err(e) => {
                console.show_error(READ_FAILED_MESSAGE, Some(&e))?;
                RecordStore::new()
            }
        };
        Ok(App {
            console,
            store,
            path,
            state: State::Running,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply one menu choice and return the next state.
    pub fn step(&mut self, choice: MenuChoice) -> Result<State> {
        log::debug!("Dispatching {:?}", choice);
        match choice {
            MenuChoice::Register => match self.console.read_new_registration() {
                Ok(record) => self.store.push(record),
                Err(RegistrationError::Invalid(e)) => {
                    log::warn!("Registration rejected: {}", e);
                    self.console.show_error(INVALID_VALUE_MESSAGE, Some(&e))?;
                }
                Err(RegistrationError::Console(e)) => {
                    return Err(e).context("Failed to read registration");
                }
            },
            MenuChoice::Show => self.console.render_registrations(&self.store)?,
            MenuChoice::Save => self.save()?,
            MenuChoice::Exit => {
                self.console.notice(GOODBYE_MESSAGE)?;
                self.state = State::Terminated;
            }
            // Already reported by the console.
            MenuChoice::Invalid => {}
        }
        Ok(self.state)
    }

    fn save(&mut self) -> Result<()> {
        let spinner = self.console.spinner("Saving...");
        let result = storage::save(&self.path, &self.store);
        spinner.finish_and_clear();
        match result {
            Ok(()) => self.console.render_registrations(&self.store)?,
            Err(e) => self.console.show_error(WRITE_FAILED_MESSAGE, Some(&e))?,
        }
        Ok(())
    }

    /// Show the menu and dispatch until Exit, then hand back the console
    /// and the (possibly unsaved) store.
    pub fn run(mut self) -> Result<(Console<P, W>, RecordStore)> {
        while self.state == State::Running {
            self.console.render_menu()?;
            let choice = self
                .console
                .read_menu_choice()
                .context("Failed to read menu choice")?;
            self.step(choice)?;
        }
        Ok((self.console, self.store))
    }
}
