// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `models`: Core data types (accounts, cars, drivers).
// - `store`: In-memory account registry and append-only audit log.
// - `auth`: Password hashing, rental-code generation, login and
//   registration.
// - `fleet`: Pure state transitions for assigning, removing, renting
//   and returning cars.
// - `error`: The domain error enum shared by the above.
// - `ui`: Terminal menus and prompts that delegate to `auth`/`fleet`.
//
// Keeping this separation makes it easier to test the domain logic
// without a console, or to replace the UI in the future (for example,
// adding a TUI).
pub mod auth;
pub mod error;
pub mod fleet;
pub mod models;
pub mod store;
pub mod ui;
