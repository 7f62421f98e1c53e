//! Defines the core data models and database queries for transactions.

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, database_id::TransactionId};

/// The maximum number of characters allowed in a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

// ============================================================================
// MODELS
// ============================================================================

/// Whether a transaction records money spent or money earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
}

impl TransactionKind {
    fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            other => Err(FromSqlError::Other(
                format!("invalid transaction kind {other:?}").into(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Always non-negative; whether money moved in or out is carried by
    /// [Transaction::kind].
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The free-text category label, e.g. "Groceries", "Transport", "Rent".
    pub category: String,
    /// When the transaction was recorded.
    pub created_at: OffsetDateTime,
}

/// The payload for creating a transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The free-text category label.
    pub category: String,
}

/// The payload for partially updating a transaction.
///
/// Fields left unset keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionChanges {
    /// The new amount, if it should change.
    pub amount: Option<f64>,
    /// The new description, if it should change.
    pub description: Option<String>,
    /// The new date, if it should change.
    pub date: Option<Date>,
    /// The new kind, if it should change.
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    /// The new category, if it should change.
    pub category: Option<String>,
}

fn validate(amount: f64, description: &str) -> Result<(), Error> {
    if amount < 0.0 {
        return Err(Error::NegativeAmount(amount));
    }

    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(Error::DescriptionTooLong(length));
    }

    Ok(())
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NegativeAmount] if the amount is less than zero,
/// - or [Error::DescriptionTooLong] if the description is over
///   [MAX_DESCRIPTION_LENGTH] characters,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    validate(new_transaction.amount, &new_transaction.description)?;

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, description, date, kind, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, amount, description, date, kind, category, created_at",
        )?
        .query_one(
            (
                new_transaction.amount,
                new_transaction.description,
                new_transaction.date,
                new_transaction.kind,
                new_transaction.category,
                OffsetDateTime::now_utc(),
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, amount, description, date, kind, category, created_at
             FROM \"transaction\" WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve all transactions, ordered by date descending and then by
/// creation time descending.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, description, date, kind, category, created_at
             FROM \"transaction\"
             ORDER BY date DESC, created_at DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Apply a partial update to the transaction with `id` and return the
/// updated record.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid
///   transaction,
/// - or [Error::NegativeAmount]/[Error::DescriptionTooLong] if the merged
///   record fails validation,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    changes: TransactionChanges,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let existing = get_transaction(id, connection).map_err(|error| match error {
        Error::NotFound => Error::UpdateMissingTransaction,
        error => error,
    })?;

    let updated = Transaction {
        id: existing.id,
        amount: changes.amount.unwrap_or(existing.amount),
        description: changes.description.unwrap_or(existing.description),
        date: changes.date.unwrap_or(existing.date),
        kind: changes.kind.unwrap_or(existing.kind),
        category: changes.category.unwrap_or(existing.category),
        created_at: existing.created_at,
    };

    validate(updated.amount, &updated.description)?;

    connection.execute(
        "UPDATE \"transaction\"
         SET amount = ?1, description = ?2, date = ?3, kind = ?4, category = ?5
         WHERE id = ?6",
        (
            updated.amount,
            &updated.description,
            updated.date,
            updated.kind,
            &updated.category,
            id,
        ),
    )?;

    Ok(updated)
}

/// Delete a transaction by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid
///   transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
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
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            kind TEXT NOT NULL,
            category TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date, created_at);
        CREATE INDEX IF NOT EXISTS idx_transaction_kind ON \"transaction\"(kind);",
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        kind: row.get(4)?,
        category: row.get(5)?,
        created_at: row.get(6)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
