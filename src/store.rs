// In-memory account store and audit log.
//
// The store is constructed explicitly in `main` and passed by mutable
// reference into the auth and fleet layers; there is no global state.
// Its lifetime is the process lifetime and nothing is persisted.

use crate::auth;
use crate::error::RentalError;
use crate::models::{Account, AdminAccount, UserAccount};

/// Ordered collection of accounts plus an append-only audit log.
///
/// The audit log records successful mutating operations only; failed
/// operations leave both the accounts and the log untouched.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
    audit_log: Vec<String>,
}

impl AccountStore {
    /// An empty store with no accounts and no log entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with one admin (`admin`/`admin123`) and one
    /// user (`user`/`user123`) so the system is immediately usable.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let admin = AdminAccount::new(
            "admin",
            auth::hash_password("admin123"),
            auth::ADMIN_SECRET,
        );
        let user = UserAccount::new("user", auth::hash_password("user123"));
        // Seed usernames are distinct, insertion cannot fail here.
        let _ = store.add(Account::Admin(admin));
        let _ = store.add(Account::User(user));
        store
    }

    /// Linear scan for an account by exact username.
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username() == username)
    }

    /// Mutable lookup of a USER-role account. Admin accounts are not
    /// returned; car operations only ever target users.
    pub fn find_user_mut(&mut self, username: &str) -> Option<&mut UserAccount> {
        self.accounts.iter_mut().find_map(|a| match a {
            Account::User(u) if u.username == username => Some(u),
            _ => None,
        })
    }

    /// Read-only lookup of a USER-role account.
    pub fn find_user(&self, username: &str) -> Option<&UserAccount> {
        self.accounts.iter().find_map(|a| match a {
            Account::User(u) if u.username == username => Some(u),
            _ => None,
        })
    }

    /// Insert an account, refusing duplicates by username. The store is
    /// left untouched on refusal.
    pub fn add(&mut self, account: Account) -> Result<(), RentalError> {
        if self.find_by_username(account.username()).is_some() {
            return Err(RentalError::DuplicateUsername(
                account.username().to_string(),
            ));
        }
        self.accounts.push(account);
        Ok(())
    }

    /// All USER-role accounts in insertion order.
    pub fn list_users(&self) -> impl Iterator<Item = &UserAccount> {
        self.accounts.iter().filter_map(|a| match a {
            Account::User(u) => Some(u),
            _ => None,
        })
    }

    /// Whether any car anywhere in the system carries this plate,
    /// compared case-insensitively.
    pub fn plate_exists(&self, plate: &str) -> bool {
        self.list_users()
            .flat_map(|u| u.cars.iter())
            .any(|car| car.plate_matches(plate))
    }

    /// Append one audit line. Lines are never removed or reordered.
    pub fn append_log(&mut self, line: String) {
        self.audit_log.push(line);
    }

    /// The full audit log in insertion order.
    pub fn audit_log(&self) -> &[String] {
        &self.audit_log
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn seeded_store_has_one_admin_and_one_user() {
        let store = AccountStore::seeded();
        assert_eq!(store.account_count(), 2);
        assert_eq!(
            store.find_by_username("admin").map(|a| a.role()),
            Some(Role::Admin)
        );
        assert_eq!(
            store.find_by_username("user").map(|a| a.role()),
            Some(Role::User)
        );
    }

    #[test]
    fn add_refuses_duplicate_username_without_mutation() {
        let mut store = AccountStore::seeded();
        let dup = Account::User(UserAccount::new("user", "whatever"));
        let err = store.add(dup).unwrap_err();
        assert_eq!(err, RentalError::DuplicateUsername("user".into()));
        assert_eq!(store.account_count(), 2);
    }

    #[test]
    fn find_user_skips_admin_accounts() {
        let mut store = AccountStore::seeded();
        assert!(store.find_user_mut("admin").is_none());
        assert!(store.find_user_mut("user").is_some());
    }

    #[test]
    fn list_users_preserves_insertion_order() {
        let mut store = AccountStore::seeded();
        store
            .add(Account::User(UserAccount::new("beta", "h")))
            .unwrap();
        store
            .add(Account::User(UserAccount::new("alpha", "h")))
            .unwrap();
        let names: Vec<&str> = store.list_users().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["user", "beta", "alpha"]);
    }

    #[test]
    fn audit_log_appends_in_order() {
        let mut store = AccountStore::new();
        store.append_log("first".into());
        store.append_log("second".into());
        assert_eq!(store.audit_log(), ["first", "second"]);
    }
}
