// Authentication: password hashing, rental-code generation, login and
// registration against an `AccountStore`.
//
// Passwords are stored as unsalted SHA-256 hex digests and verified by
// comparing digests. That is a known weakness kept from the original
// design, not something this module tries to improve on.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::RentalError;
use crate::models::{Account, AdminAccount, Role, UserAccount};
use crate::store::AccountStore;

/// The single fixed secret required to register an admin account.
pub const ADMIN_SECRET: &str = "LTO-ADMIN-2025";

/// Result of a successful login, handed to the UI so it can open the
/// matching dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

/// Deterministic SHA-256 hex digest of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// An 8-character uppercase alphanumeric rental code derived from a
/// random UUID. Each call is independent; no uniqueness is enforced
/// against previously issued codes.
pub fn generate_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

/// Digest the supplied password and linear-scan the store for a
/// username+digest match.
pub fn login(
    store: &AccountStore,
    username: &str,
    password: &str,
) -> Result<Session, RentalError> {
    let digest = hash_password(password);
    store
        .find_by_username(username)
        .filter(|a| a.password_hash() == digest)
        .map(|a| Session {
            username: a.username().to_string(),
            role: a.role(),
        })
        .ok_or(RentalError::InvalidCredentials)
}

/// Register a new user account with an empty car list.
pub fn register_user(
    store: &mut AccountStore,
    username: &str,
    password: &str,
) -> Result<(), RentalError> {
    store.add(Account::User(UserAccount::new(
        username,
        hash_password(password),
    )))
}

/// Register a new admin account. The secret is checked before anything
/// else; a wrong secret never reveals whether the username is taken.
pub fn register_admin(
    store: &mut AccountStore,
    secret: &str,
    username: &str,
    password: &str,
) -> Result<(), RentalError> {
    if secret != ADMIN_SECRET {
        return Err(RentalError::BadAdminCode);
    }
    store.add(Account::Admin(AdminAccount::new(
        username,
        hash_password(password),
        ADMIN_SECRET,
    )))
}
