//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{DatabaseId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// When the transaction happened, exactly as the client sent it.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category of the transaction, e.g. "Groceries", "Rent".
    pub category: String,
    /// Whether money was earned or spent, conventionally "income" or "expense".
    #[serde(rename = "type")]
    pub kind: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        date: &str,
        description: &str,
        category: &str,
        kind: &str,
        amount: f64,
    ) -> TransactionBuilder {
        TransactionBuilder {
            date: date.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
            kind: kind.to_owned(),
            amount,
        }
    }
}

/// The fields of a [Transaction] that has not been stored yet.
///
/// The database assigns the ID in [create_transaction]. No validation happens
/// here, callers are expected to have checked the fields already.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The date when the transaction occurred.
    ///
    /// Stored as given. Dates are compared as text when listing, so
    /// ISO 8601 dates (`2024-05-01`) sort chronologically.
    pub date: String,

    /// A human-readable description of the transaction.
    ///
    /// # Examples
    /// - `"Salary - January 2025"`
    /// - `"Coffee"`
    pub description: String,

    /// The category of the transaction, e.g. "Food", "Transport", "Rent".
    pub category: String,

    /// The transaction type, conventionally "income" or "expense".
    pub kind: String,

    /// The monetary amount of the transaction.
    pub amount: f64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (date, description, category, type, amount)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, description, category, type, amount",
        )?
        .query_row(
            (
                builder.date,
                builder.description,
                builder.category,
                builder.kind,
                builder.amount,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Get every transaction, newest date first.
///
/// Transactions on the same date are ordered by ID, most recently created first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, date, description, category, type, amount FROM \"transaction\"
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Delete the transaction with `id`.
///
/// Deleting an ID that is not in the database is not an error, the returned
/// row count will be zero.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )
        .map_err(|err| err.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                type TEXT NOT NULL,
                amount REAL NOT NULL
                )",
        (),
    )?;

    // Covers the ORDER BY used when listing transactions.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date_id ON \"transaction\"(date, id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let category = row.get(3)?;
    let kind = row.get(4)?;
    let amount = row.get(5)?;

    Ok(Transaction {
        id,
        date,
        description,
        category,
        kind,
        amount,
    })
}

// ============================================================================
// TESTS
// ============================================================================
