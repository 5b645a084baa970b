// Entrypoint for the CLI application.
// - Keeps `main` small: build the seeded store and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling for the demo.

use lto_rental_cli::{store::AccountStore, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // The store lives for the whole process and is passed by reference
    // into every flow; nothing is persisted across runs.
    let mut store = AccountStore::seeded();

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&mut store)?;
    Ok(())
}
