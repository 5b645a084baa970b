// UI layer: interactive menus built with `dialoguer`.
// The functions here only prompt, dispatch into the domain modules and
// print results; all state transitions live in `auth` and `fleet` so
// they can be tested without simulating console input.

use crate::auth::{self, Session};
use crate::fleet;
use crate::models::{CarSpec, Role};
use crate::store::AccountStore;
use anyhow::Result;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// Main interactive menu. Receives the account store and runs a select
/// loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: arrow keys and Enter
/// choose an option, so there is no invalid numeric choice to handle.
pub fn main_menu(store: &mut AccountStore) -> Result<()> {
    println!("--- LTO CAR RENTAL SYSTEM ---");
    loop {
        let items = vec![
            "Login",
            "Register User",
            "Register Admin (requires secret)",
            "View Audit Logs",
            "Exit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                // A successful login opens the dashboard matching the
                // account's role; the session ends on logout.
                if let Some(session) = handle_login(store)? {
                    match session.role {
                        Role::Admin => admin_menu(store, &session)?,
                        Role::User => user_menu(store, &session)?,
                    }
                }
            }
            1 => handle_register_user(store)?,
            2 => handle_register_admin(store)?,
            3 => print_audit_log(store),
            4 => break,
            _ => {}
        }
    }
    println!("Exiting.");
    Ok(())
}

/// Collect credentials and attempt a login. Returns the session on
/// success, `None` on bad credentials (reported inline).
fn handle_login(store: &AccountStore) -> Result<Option<Session>> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;

    let spinner = auth_spinner("Logging in...");
    match auth::login(store, &username, &password) {
        Ok(session) => {
            spinner.finish_and_clear();
            println!("Login successful. Role: {}", session.role);
            Ok(Some(session))
        }
        Err(e) => {
            spinner.finish_and_clear();
            println!("{e}");
            Ok(None)
        }
    }
}

fn handle_register_user(store: &mut AccountStore) -> Result<()> {
    let username: String = Input::new().with_prompt("New username").interact_text()?;
    let password: String = Password::new().with_prompt("New password").interact()?;

    let spinner = auth_spinner("Registering...");
    let outcome = auth::register_user(store, &username, &password);
    spinner.finish_and_clear();
    match outcome {
        Ok(()) => println!("User created!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn handle_register_admin(store: &mut AccountStore) -> Result<()> {
    let secret: String = Password::new()
        .with_prompt("Secret admin code")
        .interact()?;
    let username: String = Input::new()
        .with_prompt("New admin username")
        .interact_text()?;
    let password: String = Password::new().with_prompt("New admin password").interact()?;

    match auth::register_admin(store, &secret, &username, &password) {
        Ok(()) => println!("Admin created!"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Admin dashboard: user listing, car assignment/removal, audit log.
fn admin_menu(store: &mut AccountStore, session: &Session) -> Result<()> {
    loop {
        println!("\n--- ADMIN MENU ({}) ---", session.username);
        let items = vec![
            "View All Users",
            "Add Car To User",
            "Delete Car From User",
            "View Audit Logs",
            "Logout",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                println!("\n--- USERS ---");
                for user in store.list_users() {
                    println!("- {}", user.username);
                }
            }
            1 => {
                let username: String = Input::new()
                    .with_prompt("Username to assign a car")
                    .interact_text()?;
                let spec = prompt_car_spec()?;
                match fleet::assign_car(store, &session.username, &username, spec) {
                    Ok(()) => println!("Car assigned to user {username}."),
                    Err(e) => println!("{e}"),
                }
            }
            2 => {
                let username: String = Input::new()
                    .with_prompt("Username who owns the car")
                    .interact_text()?;
                let plate: String = Input::new()
                    .with_prompt("Plate number to delete")
                    .interact_text()?;
                match fleet::remove_car(store, &session.username, &username, &plate) {
                    Ok(()) => println!("Car removed."),
                    Err(e) => println!("{e}"),
                }
            }
            3 => print_audit_log(store),
            4 => return Ok(()),
            _ => {}
        }
    }
}

/// User dashboard: own cars, adding cars, rentals and returns.
fn user_menu(store: &mut AccountStore, session: &Session) -> Result<()> {
    loop {
        println!("\n--- USER MENU ({}) ---", session.username);
        let items = vec![
            "View My Cars",
            "Add Car",
            "Rent a Car",
            "Complete Rental",
            "Logout",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                println!("\n--- MY CARS ---");
                match store.find_user(&session.username) {
                    Some(user) if !user.cars.is_empty() => {
                        for car in &user.cars {
                            println!("{car}");
                        }
                    }
                    _ => println!("<no cars>"),
                }
            }
            1 => {
                let spec = prompt_car_spec()?;
                match fleet::add_car(store, &session.username, spec) {
                    Ok(()) => println!("Car added to your account."),
                    Err(e) => println!("{e}"),
                }
            }
            2 => {
                let plate: String = Input::new().with_prompt("Plate number").interact_text()?;
                let driver: String = Input::new().with_prompt("Driver name").interact_text()?;
                let license: String = Input::new().with_prompt("License no").interact_text()?;
                match fleet::rent_car(store, &session.username, &plate, &driver, &license) {
                    Ok(code) => println!("Car rented! Unique Code: {code}"),
                    Err(e) => println!("{e}"),
                }
            }
            3 => {
                let plate: String = Input::new().with_prompt("Plate number").interact_text()?;
                match fleet::complete_rental(store, &session.username, &plate) {
                    Ok(prev) => {
                        println!("Rental completed, car returned to AVAILABLE.");
                        println!("Previous driver: {prev}");
                    }
                    Err(e) => println!("{e}"),
                }
            }
            4 => return Ok(()),
            _ => {}
        }
    }
}

/// Prompt the fields of a new car. `Input::<i32>` re-prompts inline
/// until the year parses, so no invalid year ever reaches the store.
fn prompt_car_spec() -> Result<CarSpec> {
    let plate_number: String = Input::new().with_prompt("Plate number").interact_text()?;
    let brand: String = Input::new().with_prompt("Brand").interact_text()?;
    let model: String = Input::new().with_prompt("Model").interact_text()?;
    let year: i32 = Input::new().with_prompt("Year").interact_text()?;
    Ok(CarSpec {
        plate_number,
        brand,
        model,
        year,
    })
}

fn print_audit_log(store: &AccountStore) {
    println!("\n--- AUDIT LOGS ---");
    if store.audit_log().is_empty() {
        println!("<no logs>");
    } else {
        for line in store.audit_log() {
            println!("{line}");
        }
    }
}

/// Short spinner shown during auth flows. The store is in-memory, so a
/// small delay keeps the spinner visible at all.
fn auth_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    thread::sleep(Duration::from_millis(300));
    spinner
}
