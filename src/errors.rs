//! Unified error type for the car sales core.
//!
//! Every public operation returns [`Result`]. Store errors are wrapped through
//! `From<DbErr>`; only [`Error::FatalStore`] is unrecoverable.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by every operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before anything was written.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// No car has this ID.
    #[error("Car not found: {id}")]
    CarNotFound {
        /// Requested car ID
        id: i64,
    },

    /// The car exists but has been archived.
    #[error("Car {id} is archived and not available for purchase")]
    CarUnavailable {
        /// Archived car ID
        id: i64,
    },

    /// No client has this ID.
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// Requested client ID
        id: i64,
    },

    /// No check has this ID.
    #[error("Check not found: {id}")]
    CheckNotFound {
        /// Requested check ID
        id: i64,
    },

    /// No administrator has this ID.
    #[error("Administrator not found: {id}")]
    AdministratorNotFound {
        /// Requested administrator ID
        id: i64,
    },

    /// A check can be confirmed once.
    #[error("Check {id} is already confirmed")]
    CheckAlreadyConfirmed {
        /// Check ID
        id: i64,
    },

    /// Registration with a login that already exists.
    #[error("Login already taken: {login}")]
    DuplicateLogin {
        /// The rejected login
        login: String,
    },

    /// Unknown login or wrong password; deliberately not told apart.
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// The session belongs to the wrong kind of principal.
    #[error("Access denied: {message}")]
    AccessDenied {
        /// Which role was required
        message: String,
    },

    /// `config.toml` could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Context of the failure
        message: String,
    },

    /// The store could not be opened or initialized. Aborts the process.
    #[error("Failed to initialize store: {message}")]
    FatalStore {
        /// Context of the failure
        message: String,
    },

    /// Any other store error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `false` for errors that must abort the process.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::FatalStore { .. })
    }

    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
