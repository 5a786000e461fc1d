//! Init command
//!
//! Usage: dnevnik init

use dnevnik_store::Register;

/// Create the database file and both tables
pub fn execute(register: &Register) -> Result<(), Box<dyn std::error::Error>> {
    Register::create(register.db_path())?;
    println!("✓ Register ready at {}", register.db_path().display());
    Ok(())
}
