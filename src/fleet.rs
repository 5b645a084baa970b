// Fleet operations: the pure state transitions behind the admin and
// user dashboards. Every function here validates first and mutates the
// store only on the success path, appending exactly one audit entry.
//
// The only status transitions are Available --rent--> Rented and
// Rented --complete--> Available.

use crate::auth;
use crate::error::RentalError;
use crate::models::{Car, CarSpec, CarStatus, DriverInfo};
use crate::store::AccountStore;

/// Admin assigns a new car to a named user. The plate must not exist
/// anywhere in the system (case-insensitive).
pub fn assign_car(
    store: &mut AccountStore,
    admin: &str,
    username: &str,
    spec: CarSpec,
) -> Result<(), RentalError> {
    if store.find_user(username).is_none() {
        return Err(RentalError::UserNotFound(username.to_string()));
    }
    if store.plate_exists(&spec.plate_number) {
        return Err(RentalError::DuplicatePlate(spec.plate_number));
    }
    let plate = spec.plate_number.clone();
    // user existence was checked above
    if let Some(user) = store.find_user_mut(username) {
        user.cars.push(Car::new(spec));
    }
    store.append_log(format!("ADMIN {admin} assigned car {plate} to {username}"));
    Ok(())
}

/// Admin removes a car from a named user by plate.
pub fn remove_car(
    store: &mut AccountStore,
    admin: &str,
    username: &str,
    plate: &str,
) -> Result<(), RentalError> {
    let user = store
        .find_user_mut(username)
        .ok_or_else(|| RentalError::UserNotFound(username.to_string()))?;
    let idx = user
        .cars
        .iter()
        .position(|c| c.plate_matches(plate))
        .ok_or_else(|| RentalError::CarNotFound(plate.to_string()))?;
    let removed = user.cars.remove(idx);
    store.append_log(format!(
        "ADMIN {admin} removed car {} from {username}",
        removed.plate_number
    ));
    Ok(())
}

/// User adds a car to their own account. Same system-wide plate
/// uniqueness rule as admin assignment.
pub fn add_car(
    store: &mut AccountStore,
    username: &str,
    spec: CarSpec,
) -> Result<(), RentalError> {
    if store.plate_exists(&spec.plate_number) {
        return Err(RentalError::DuplicatePlate(spec.plate_number));
    }
    let plate = spec.plate_number.clone();
    let user = store
        .find_user_mut(username)
        .ok_or_else(|| RentalError::UserNotFound(username.to_string()))?;
    user.cars.push(Car::new(spec));
    store.append_log(format!("USER {username} added car {plate}"));
    Ok(())
}

/// Start a rental on one of the caller's cars. The car must be
/// available; on success its status becomes `Rented` with a fresh
/// driver record, and the generated code is returned for display.
pub fn rent_car(
    store: &mut AccountStore,
    username: &str,
    plate: &str,
    driver_name: &str,
    license_number: &str,
) -> Result<String, RentalError> {
    let user = store
        .find_user_mut(username)
        .ok_or_else(|| RentalError::UserNotFound(username.to_string()))?;
    let car = user
        .cars
        .iter_mut()
        .find(|c| c.plate_matches(plate))
        .ok_or_else(|| RentalError::CarNotFound(plate.to_string()))?;
    if car.status.is_rented() {
        return Err(RentalError::AlreadyRented(car.plate_number.clone()));
    }
    let code = auth::generate_code();
    car.status = CarStatus::Rented(DriverInfo {
        name: driver_name.to_string(),
        license_number: license_number.to_string(),
        unique_code: code.clone(),
    });
    let line = format!(
        "RENTED: {} by {driver_name} (user {username})",
        car.plate_number
    );
    store.append_log(line);
    Ok(code)
}

/// Complete a rental on one of the caller's cars. The car must be
/// rented; on success the driver record is discarded, the car returns
/// to `Available`, and the previous driver's summary is returned for
/// display.
pub fn complete_rental(
    store: &mut AccountStore,
    username: &str,
    plate: &str,
) -> Result<String, RentalError> {
    let user = store
        .find_user_mut(username)
        .ok_or_else(|| RentalError::UserNotFound(username.to_string()))?;
    let car = user
        .cars
        .iter_mut()
        .find(|c| c.plate_matches(plate))
        .ok_or_else(|| RentalError::CarNotFound(plate.to_string()))?;
    let prev_driver = match &car.status {
        CarStatus::Rented(d) => d.to_string(),
        CarStatus::Available => return Err(RentalError::NotRented(car.plate_number.clone())),
    };
    car.status = CarStatus::Available;
    let line = format!("COMPLETED: {} previous driver: {prev_driver}", car.plate_number);
    store.append_log(line);
    Ok(prev_driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(plate: &str) -> CarSpec {
        CarSpec {
            plate_number: plate.into(),
            brand: "Honda".into(),
            model: "Civic".into(),
            year: 2020,
        }
    }

    fn store_with_car(plate: &str) -> AccountStore {
        let mut store = AccountStore::seeded();
        assign_car(&mut store, "admin", "user", spec(plate)).unwrap();
        store
    }

    #[test]
    fn assign_appends_car_and_one_audit_entry() {
        let mut store = AccountStore::seeded();
        assign_car(&mut store, "admin", "user", spec("ABC123")).unwrap();
        let user = store.find_user("user").unwrap();
        assert_eq!(user.cars.len(), 1);
        assert_eq!(user.cars[0].status, CarStatus::Available);
        assert_eq!(
            store.audit_log(),
            ["ADMIN admin assigned car ABC123 to user"]
        );
    }

    #[test]
    fn assign_to_unknown_or_admin_target_fails_cleanly() {
        let mut store = AccountStore::seeded();
        assert_eq!(
            assign_car(&mut store, "admin", "ghost", spec("ABC123")).unwrap_err(),
            RentalError::UserNotFound("ghost".into())
        );
        // admins never hold cars, role is validated too
        assert_eq!(
            assign_car(&mut store, "admin", "admin", spec("ABC123")).unwrap_err(),
            RentalError::UserNotFound("admin".into())
        );
        assert!(store.audit_log().is_empty());
    }

    #[test]
    fn duplicate_plate_is_refused_case_insensitively() {
        let mut store = store_with_car("ABC123");
        assert_eq!(
            assign_car(&mut store, "admin", "user", spec("abc123")).unwrap_err(),
            RentalError::DuplicatePlate("abc123".into())
        );
        assert_eq!(
            add_car(&mut store, "user", spec("Abc123")).unwrap_err(),
            RentalError::DuplicatePlate("Abc123".into())
        );
        // only the original assignment was logged
        assert_eq!(store.audit_log().len(), 1);
        assert_eq!(store.find_user("user").unwrap().cars.len(), 1);
    }

    #[test]
    fn plate_uniqueness_spans_accounts() {
        let mut store = store_with_car("ABC123");
        crate::auth::register_user(&mut store, "other", "pw").unwrap();
        assert_eq!(
            add_car(&mut store, "other", spec("ABC123")).unwrap_err(),
            RentalError::DuplicatePlate("ABC123".into())
        );
    }

    #[test]
    fn user_add_car_logs_under_their_name() {
        let mut store = AccountStore::seeded();
        add_car(&mut store, "user", spec("XYZ789")).unwrap();
        assert_eq!(store.audit_log(), ["USER user added car XYZ789"]);
    }

    #[test]
    fn rent_sets_status_and_returns_code() {
        let mut store = store_with_car("ABC123");
        let code = rent_car(&mut store, "user", "abc123", "Jane Doe", "L1").unwrap();
        assert_eq!(code.len(), 8);
        let car = &store.find_user("user").unwrap().cars[0];
        match &car.status {
            CarStatus::Rented(d) => {
                assert_eq!(d.name, "Jane Doe");
                assert_eq!(d.license_number, "L1");
                assert_eq!(d.unique_code, code);
            }
            CarStatus::Available => panic!("car should be rented"),
        }
        assert_eq!(
            store.audit_log().last().unwrap(),
            "RENTED: ABC123 by Jane Doe (user user)"
        );
    }

    #[test]
    fn renting_a_rented_car_fails_and_keeps_state() {
        let mut store = store_with_car("ABC123");
        rent_car(&mut store, "user", "ABC123", "Jane Doe", "L1").unwrap();
        let logs_before = store.audit_log().len();
        assert_eq!(
            rent_car(&mut store, "user", "ABC123", "John Roe", "L2").unwrap_err(),
            RentalError::AlreadyRented("ABC123".into())
        );
        let car = &store.find_user("user").unwrap().cars[0];
        match &car.status {
            CarStatus::Rented(d) => assert_eq!(d.name, "Jane Doe"),
            CarStatus::Available => panic!("first rental must survive"),
        }
        assert_eq!(store.audit_log().len(), logs_before);
    }

    #[test]
    fn complete_clears_driver_and_logs_the_previous_summary() {
        let mut store = store_with_car("ABC123");
        let code = rent_car(&mut store, "user", "ABC123", "Jane Doe", "L1").unwrap();
        let prev = complete_rental(&mut store, "user", "ABC123").unwrap();
        assert_eq!(prev, format!("Jane Doe (Lic: L1, Code: {code})"));
        let car = &store.find_user("user").unwrap().cars[0];
        assert_eq!(car.status, CarStatus::Available);
        assert_eq!(
            store.audit_log().last().unwrap(),
            &format!("COMPLETED: ABC123 previous driver: {prev}")
        );
    }

    #[test]
    fn completing_an_available_car_fails() {
        let mut store = store_with_car("ABC123");
        let logs_before = store.audit_log().len();
        assert_eq!(
            complete_rental(&mut store, "user", "ABC123").unwrap_err(),
            RentalError::NotRented("ABC123".into())
        );
        assert_eq!(store.audit_log().len(), logs_before);
    }

    #[test]
    fn rent_then_complete_then_rent_again() {
        let mut store = store_with_car("ABC123");
        rent_car(&mut store, "user", "ABC123", "Jane Doe", "L1").unwrap();
        complete_rental(&mut store, "user", "ABC123").unwrap();
        rent_car(&mut store, "user", "ABC123", "John Roe", "L2").unwrap();
        assert_eq!(store.audit_log().len(), 4);
    }

    #[test]
    fn operations_on_unknown_cars_fail() {
        let mut store = store_with_car("ABC123");
        assert_eq!(
            rent_car(&mut store, "user", "ZZZ000", "Jane", "L1").unwrap_err(),
            RentalError::CarNotFound("ZZZ000".into())
        );
        assert_eq!(
            complete_rental(&mut store, "user", "ZZZ000").unwrap_err(),
            RentalError::CarNotFound("ZZZ000".into())
        );
    }

    #[test]
    fn remove_car_deletes_and_logs() {
        let mut store = store_with_car("ABC123");
        remove_car(&mut store, "admin", "user", "abc123").unwrap();
        assert!(store.find_user("user").unwrap().cars.is_empty());
        assert_eq!(
            store.audit_log().last().unwrap(),
            "ADMIN admin removed car ABC123 from user"
        );
        // plate is free for reuse after removal
        assign_car(&mut store, "admin", "user", spec("ABC123")).unwrap();
    }

    #[test]
    fn remove_unknown_car_or_user_fails() {
        let mut store = store_with_car("ABC123");
        assert_eq!(
            remove_car(&mut store, "admin", "ghost", "ABC123").unwrap_err(),
            RentalError::UserNotFound("ghost".into())
        );
        assert_eq!(
            remove_car(&mut store, "admin", "user", "ZZZ000").unwrap_err(),
            RentalError::CarNotFound("ZZZ000".into())
        );
        assert_eq!(store.audit_log().len(), 1);
    }
}
