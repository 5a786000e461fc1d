//! Add-student command
//!
//! Usage: dnevnik add-student <FIRST_NAME> <LAST_NAME> <CLASS>

use clap::Args;
use dnevnik_store::Register;

use super::list::print_records;

#[derive(Debug, Args)]
pub struct AddStudentArgs {
    /// First name (required, must not be blank)
    pub first_name: String,

    /// Last name
    #[arg(default_value = "")]
    pub last_name: String,

    /// Class, e.g. 6A
    #[arg(default_value = "")]
    pub class_name: String,
}

/// Insert the student, then print the refreshed list
pub fn execute(args: AddStudentArgs, register: &Register) -> Result<(), Box<dyn std::error::Error>> {
    let student = register.insert_student(&args.first_name, &args.last_name, &args.class_name)?;
    eprintln!("✓ Added student {}", student.person.id);

    print_records(&register.list_all()?, false)
}
