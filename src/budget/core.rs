//! Defines the core data model and database queries for budgets.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, database_id::BudgetId};

// ============================================================================
// MODELS
// ============================================================================

/// A monthly spending ceiling assigned to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The ID of the budget.
    pub id: BudgetId,
    /// The category the budget applies to. Unique across budgets.
    pub category: String,
    /// The spending ceiling for one calendar month.
    pub monthly_limit: f64,
    /// When the budget was first created.
    pub created_at: OffsetDateTime,
}

/// The payload for creating or overwriting a budget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    /// The category the budget applies to.
    pub category: String,
    /// The spending ceiling for one calendar month.
    pub monthly_limit: f64,
}

/// The result of upserting a budget, distinguishing a fresh record from an
/// overwritten one so the endpoint can choose between 201 and 200.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertedBudget {
    /// No budget existed for the category, a new record was created.
    Created(Budget),
    /// A budget already existed for the category, its limit was overwritten.
    Updated(Budget),
}

impl UpsertedBudget {
    /// The budget record regardless of whether it was created or updated.
    pub fn into_budget(self) -> Budget {
        match self {
            UpsertedBudget::Created(budget) | UpsertedBudget::Updated(budget) => budget,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a budget for a category, or overwrite the monthly limit of the
/// existing budget for that category.
///
/// The write is a single atomic SQL upsert against the UNIQUE constraint on
/// `category`, so concurrent upserts for the same category can never produce
/// duplicate rows.
///
/// # Errors
/// This function will return a:
/// - [Error::NegativeLimit] if the monthly limit is less than zero,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn upsert_budget(
    new_budget: NewBudget,
    connection: &Connection,
) -> Result<UpsertedBudget, Error> {
    if new_budget.monthly_limit < 0.0 {
        return Err(Error::NegativeLimit(new_budget.monthly_limit));
    }

    // Only used to pick the response status, the write below is atomic.
    let existed = find_budget_by_category(&new_budget.category, connection)?.is_some();

    let budget = connection
        .prepare(
            "INSERT INTO budget (category, monthly_limit, created_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(category) DO UPDATE SET monthly_limit = excluded.monthly_limit
             RETURNING id, category, monthly_limit, created_at",
        )?
        .query_one(
            (
                &new_budget.category,
                new_budget.monthly_limit,
                OffsetDateTime::now_utc(),
            ),
            map_budget_row,
        )?;

    if existed {
        Ok(UpsertedBudget::Updated(budget))
    } else {
        Ok(UpsertedBudget::Created(budget))
    }
}

/// Retrieve the budget for `category`, if one exists.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn find_budget_by_category(
    category: &str,
    connection: &Connection,
) -> Result<Option<Budget>, Error> {
    let result = connection
        .prepare(
            "SELECT id, category, monthly_limit, created_at
             FROM budget WHERE category = :category",
        )?
        .query_one(&[(":category", &category)], map_budget_row);

    match result {
        Ok(budget) => Ok(Some(budget)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Retrieve all budgets, ordered by creation time descending.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare(
            "SELECT id, category, monthly_limit, created_at
             FROM budget
             ORDER BY created_at DESC",
        )?
        .query_map([], map_budget_row)?
        .map(|maybe_budget| maybe_budget.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the monthly limit of the budget with `id` and return the
/// updated record.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingBudget] if `id` does not refer to a valid budget,
/// - or [Error::NegativeLimit] if the monthly limit is less than zero,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_budget_limit(
    id: BudgetId,
    monthly_limit: f64,
    connection: &Connection,
) -> Result<Budget, Error> {
    if monthly_limit < 0.0 {
        return Err(Error::NegativeLimit(monthly_limit));
    }

    let result = connection
        .prepare(
            "UPDATE budget SET monthly_limit = ?1 WHERE id = ?2
             RETURNING id, category, monthly_limit, created_at",
        )?
        .query_one((monthly_limit, id), map_budget_row);

    match result {
        Ok(budget) => Ok(budget),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::UpdateMissingBudget),
        Err(error) => Err(error.into()),
    }
}

/// Delete a budget by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingBudget] if `id` does not refer to a valid budget,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_budget(id: BudgetId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM budget WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingBudget);
    }

    Ok(())
}

/// Get the total number of budgets in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
#[cfg(test)]
pub fn count_budgets(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM budget;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the budget table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL UNIQUE,
            monthly_limit REAL NOT NULL,
            created_at TEXT NOT NULL
        );",
    )?;

    Ok(())
}

fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        monthly_limit: row.get(2)?,
        created_at: row.get(3)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
