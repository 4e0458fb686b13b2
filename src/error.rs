use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the load/save boundary between the store and its JSON file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize registrations")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A name part typed at the registration prompt was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The first name should only contain alphabetic characters.")]
    FirstName,

    #[error("The last name should only contain alphabetic characters.")]
    LastName,
}

/// Why `ui::Console::read_new_registration` produced no record.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("could not read from the console")]
    Console(#[from] std::io::Error),
}
