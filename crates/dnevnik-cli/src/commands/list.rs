//! List command
//!
//! Usage: dnevnik list [--json]

use clap::Args;
use dnevnik_core::{label, Record};
use dnevnik_store::Register;

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Print records as a JSON array instead of labels
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub fn execute(args: ListArgs, register: &Register) -> Result<(), Box<dyn std::error::Error>> {
    let records = register.list_all()?;
    print_records(&records, args.json)
}

/// Print one label per line, or the records as JSON
pub fn print_records(records: &[Record], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for record in records {
        println!("{}", label(record));
    }
    Ok(())
}
