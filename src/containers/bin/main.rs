use tracing::{info, warn};
use oop_labs::containers::domain::bank_account::BankAccount;
use oop_labs::containers::domain::notebook::Notebook;
use oop_labs::containers::domain::trunk::Trunk;
use oop_labs::core::domain::Configuration;
use oop_labs::core::error::LabError;
use oop_labs::utils::logging::setup_tracing;

fn main() -> Result<(), LabError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let mut account = BankAccount::new("John Doe", 1000.0)?;
    account.deposit(200.0)?;
    account.withdraw(100.0)?;
    info!(owner = account.owner(), balance = account.get_balance(), "bank account");
    if let Err(err) = account.withdraw(5000.0) {
        warn!(error = %err, "withdrawal rejected");
    }

    let mut trunk = Trunk::new(500.0, 100.0)?;
    trunk.add_item(50.0)?;
    trunk.remove_item(30.0)?;
    info!(free_space = trunk.get_free_space(), "trunk");
    if let Err(err) = trunk.add_item(450.0) {
        warn!(error = %err, "item rejected");
    }

    let mut notebook = Notebook::new(100, 20)?;
    notebook.add_note(5)?;
    notebook.remove_note(5)?;
    info!(free_pages = notebook.get_free_pages(), "notebook");
    if let Err(err) = notebook.remove_note(30) {
        warn!(error = %err, "note removal rejected");
    }
    Ok(())
}
