// Domain error type shared by the store, auth and fleet modules.
// Every variant maps to a user-facing message printed by the UI; none
// of them terminate the program, the menu loop simply continues.

use thiserror::Error;

/// Errors produced by the domain layer (store, auth, fleet operations).
///
/// The UI reports these inline and returns to the enclosing menu. A
/// failed operation never mutates the store and never writes an audit
/// log entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RentalError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid secret code! Not allowed.")]
    BadAdminCode,

    #[error("Username '{0}' already exists.")]
    DuplicateUsername(String),

    #[error("Plate number '{0}' already exists in system.")]
    DuplicatePlate(String),

    #[error("User '{0}' not found.")]
    UserNotFound(String),

    #[error("Car '{0}' not found in this account.")]
    CarNotFound(String),

    #[error("Car '{0}' is already rented.")]
    AlreadyRented(String),

    #[error("Car '{0}' is not currently rented.")]
    NotRented(String),
}
