use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use moneymap::{
    NewBudget, NewTransaction, Period, RecordDate, create_budget, create_transaction,
    initialize_db,
};

/// A utility for creating a test database for the REST API server of moneymap.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The year to create the sample records in.
    #[arg(long, short, default_value_t = 2026)]
    year: i32,
}

/// Monthly income and expenses repeated for every month of the sample year.
const MONTHLY_TRANSACTIONS: [(f64, &str, u8, Option<&str>); 6] = [
    (42_000.0, "job", 1, Some("Monthly salary")),
    (-15_000.0, "housing", 2, Some("Rent")),
    (-4_800.0, "food", 8, None),
    (-1_350.0, "transportation", 12, Some("Commute pass")),
    (-2_200.0, "entertainment", 19, None),
    (-3_100.0, "food", 24, Some("Weekly shop")),
];

/// Budgets created for every month of the sample year.
const MONTHLY_BUDGETS: [(&str, f64); 4] = [
    ("housing", 15_000.0),
    ("food", 7_000.0),
    ("transportation", 1_500.0),
    ("entertainment", 2_000.0),
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

    println!("Creating sample transactions and budgets for {}...", args.year);

    for month in 1..=12 {
        for (amount, category, day, notes) in MONTHLY_TRANSACTIONS {
            create_transaction(
                NewTransaction {
                    amount,
                    category: category.to_owned(),
                    notes: notes.map(str::to_owned),
                    date: RecordDate::new(day, month, args.year)?,
                },
                &conn,
            )?;
        }

        for (category, amount) in MONTHLY_BUDGETS {
            create_budget(
                NewBudget {
                    category: category.to_owned(),
                    amount,
                    period: Period::new(month, args.year)?,
                    notes: None,
                },
                &conn,
            )?;
        }
    }

    println!("Success!");

    Ok(())
}
