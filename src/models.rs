// Core data model: accounts, cars and driver records.
//
// `Account` is a tagged enum rather than a trait object: the UI decides
// which dashboard to show by matching on the role, which keeps the data
// types free of any console concerns.

use std::fmt;

/// The two account roles understood by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

/// An authenticated identity stored in the [`AccountStore`](crate::store::AccountStore).
#[derive(Debug, Clone)]
pub enum Account {
    User(UserAccount),
    Admin(AdminAccount),
}

impl Account {
    pub fn username(&self) -> &str {
        match self {
            Account::User(u) => &u.username,
            Account::Admin(a) => &a.username,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Account::User(u) => &u.password_hash,
            Account::Admin(a) => &a.password_hash,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Account::User(_) => Role::User,
            Account::Admin(_) => Role::Admin,
        }
    }
}

/// A regular user account owning an ordered collection of cars.
/// Insertion order is display order.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
    pub cars: Vec<Car>,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        UserAccount {
            username: username.into(),
            password_hash: password_hash.into(),
            cars: Vec::new(),
        }
    }
}

/// An administrator account. `admin_code` equals the shared secret the
/// admin registered with.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password_hash: String,
    pub admin_code: String,
}

impl AdminAccount {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        admin_code: impl Into<String>,
    ) -> Self {
        AdminAccount {
            username: username.into(),
            password_hash: password_hash.into(),
            admin_code: admin_code.into(),
        }
    }
}

/// Rental state of a car. The driver record lives inside the `Rented`
/// variant, so a driver can only exist while the car is rented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarStatus {
    Available,
    Rented(DriverInfo),
}

impl CarStatus {
    pub fn is_rented(&self) -> bool {
        matches!(self, CarStatus::Rented(_))
    }
}

/// Field values collected when creating a car, before it is attached to
/// an account.
#[derive(Debug, Clone)]
pub struct CarSpec {
    pub plate_number: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

/// A registered vehicle. Plate numbers are unique across the whole
/// system, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct Car {
    pub plate_number: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub status: CarStatus,
}

impl Car {
    /// Create a new car in the `Available` state from collected fields.
    pub fn new(spec: CarSpec) -> Self {
        Car {
            plate_number: spec.plate_number,
            brand: spec.brand,
            model: spec.model,
            year: spec.year,
            status: CarStatus::Available,
        }
    }

    /// Case-insensitive plate comparison, the system-wide identity rule.
    pub fn plate_matches(&self, plate: &str) -> bool {
        self.plate_number.eq_ignore_ascii_case(plate)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (status, driver) = match &self.status {
            CarStatus::Available => ("AVAILABLE", "-".to_string()),
            CarStatus::Rented(d) => ("RENTED", d.to_string()),
        };
        write!(
            f,
            "{} | {} {} | {} | {} | Driver: {}",
            self.plate_number, self.brand, self.model, self.year, status, driver
        )
    }
}

/// Driver details captured when a rental starts and discarded when it
/// completes. `unique_code` is generated per rental and is display-only;
/// no uniqueness is enforced across rentals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverInfo {
    pub name: String,
    pub license_number: String,
    pub unique_code: String,
}

impl fmt::Display for DriverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lic: {}, Code: {})",
            self.name, self.license_number, self.unique_code
        )
    }
}
