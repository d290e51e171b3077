use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{Transaction, create_transaction, initialize_db};

/// A utility for creating a test database for the expense_tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_TRANSACTIONS: [(&str, &str, &str, &str, f64); 6] = [
    ("2024-05-01", "Salary", "Salary", "income", 3200.0),
    ("2024-05-01", "Rent", "Housing", "expense", 1250.0),
    ("2024-05-02", "Coffee", "Food", "expense", 4.5),
    ("2024-05-03", "Bus pass", "Transport", "expense", 60.0),
    ("2024-05-03", "Groceries", "Food", "expense", 87.35),
    ("2024-05-05", "Concert tickets", "Entertainment", "expense", 120.0),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    for (date, description, category, kind, amount) in SAMPLE_TRANSACTIONS {
        create_transaction(
            Transaction::build(date, description, category, kind, amount),
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
