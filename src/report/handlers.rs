//! Route handlers for the report and insight endpoints.
//!
//! Each handler loads the stored records, captures today's date, and hands
//! both to the pure report functions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    AppState, Error, budget::get_all_budgets, transaction::get_all_transactions,
};

use super::{
    BudgetComparison, CategoryTotal, FinancialSummary, MonthlyExpense, SpendingInsights,
    category_totals, compare_budgets, financial_summary, monthly_expenses, spending_insights,
};

/// The state needed to build reports.
#[derive(Debug, Clone)]
pub struct ReportState {
    /// The database connection holding transactions and budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for the overall income and expense summary.
pub async fn summary_endpoint(
    State(state): State<ReportState>,
) -> Result<Json<FinancialSummary>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;

    Ok(Json(financial_summary(&transactions)))
}

/// A route handler for expense totals grouped by category.
pub async fn category_totals_endpoint(
    State(state): State<ReportState>,
) -> Result<Json<Vec<CategoryTotal>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;

    Ok(Json(category_totals(&transactions)))
}

/// A route handler for expense totals over the trailing six months.
pub async fn monthly_expenses_endpoint(
    State(state): State<ReportState>,
) -> Result<Json<Vec<MonthlyExpense>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(monthly_expenses(&transactions, today)))
}

/// A route handler for budgeted versus actual spending this month.
pub async fn budget_comparison_endpoint(
    State(state): State<ReportState>,
) -> Result<Json<Vec<BudgetComparison>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;
    let budgets = get_all_budgets(&connection)?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(compare_budgets(&transactions, &budgets, today)))
}

/// A route handler for spending insights for the current month.
pub async fn insights_endpoint(
    State(state): State<ReportState>,
) -> Result<Json<SpendingInsights>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)?;
    let budgets = get_all_budgets(&connection)?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(spending_insights(&transactions, &budgets, today)))
}
