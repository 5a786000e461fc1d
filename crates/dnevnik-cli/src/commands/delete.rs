//! Delete command
//!
//! Usage: dnevnik delete <teacher|student> <ID>
//!
//! The record is selected from the current listing; an id that is not listed
//! selects nothing and nothing is deleted.

use clap::Args;
use dnevnik_core::RecordKind;
use dnevnik_store::Register;

use super::list::print_records;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Record kind: teacher or student
    pub kind: RecordKind,

    /// Primary key within the kind's table
    pub id: i64,
}

/// Delete the selected record, then print the refreshed list
pub fn execute(args: DeleteArgs, register: &Register) -> Result<(), Box<dyn std::error::Error>> {
    let records = register.list_all()?;
    let selected = records
        .iter()
        .find(|r| r.kind() == args.kind && r.id() == args.id);

    if selected.is_none() {
        eprintln!("No {} with id {} is listed", args.kind, args.id);
    }
    register.delete_record(selected)?;

    print_records(&register.list_all()?, false)
}
