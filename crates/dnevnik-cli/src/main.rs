//! Dnevnik CLI
//!
//! Command-line front-end for the school register

use clap::{Parser, Subcommand};
use dnevnik_core::logging_facility::{init, Profile};
use dnevnik_store::Register;
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "dnevnik")]
#[command(about = "Dnevnik - school register of teachers and students", long_about = None)]
struct Cli {
    /// Database file (default: dnevnik.db next to the executable)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database file with empty tables
    Init,
    /// List all records, teachers first (default)
    List(commands::list::ListArgs),
    /// Add a student and show the refreshed list
    AddStudent(commands::student::AddStudentArgs),
    /// Delete a listed record and show the refreshed list
    Delete(commands::delete::DeleteArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = config::resolve_db_path(cli.db).and_then(|db_path| {
        let register = Register::new(db_path);
        match cli.command {
            Some(Commands::Init) => commands::init::execute(&register),
            Some(Commands::List(args)) => commands::list::execute(args, &register),
            Some(Commands::AddStudent(args)) => commands::student::execute(args, &register),
            Some(Commands::Delete(args)) => commands::delete::execute(args, &register),
            None => commands::list::execute(commands::list::ListArgs::default(), &register),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
