use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{ExpenseSession, initialize_db, validate_and_create};

/// A utility for creating a database of sample expenses for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_EXPENSES: [(&str, &str, &str); 7] = [
    ("12.50", "Food", "Cash"),
    ("3.20", "Transport", "Card"),
    ("89.99", "Utilities", "Bank"),
    ("15", "Entertainment", "Card"),
    ("7.45", "Food", "Card"),
    ("42", "Others", "Cash"),
    ("4.80", "Coffee", "Cash"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Adding {} sample expenses...", SAMPLE_EXPENSES.len());

    let mut session = ExpenseSession::default();
    for (amount, category, account) in SAMPLE_EXPENSES {
        let expense = validate_and_create(amount, category, account)?;
        session.append(expense, &conn)?;
    }

    println!("Success!");

    Ok(())
}
