//! Defines the endpoint for updating a budget's monthly limit.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    budget::{Budget, core::update_budget_limit},
    database_id::BudgetId,
};

/// The state needed to update a budget.
#[derive(Debug, Clone)]
pub struct UpdateBudgetState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The payload for updating a budget. Only the monthly limit can change,
/// the category is fixed once the budget is created.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimitChange {
    /// The new spending ceiling for one calendar month.
    pub monthly_limit: f64,
}

/// A route handler for updating a budget's monthly limit by ID.
///
/// Returns the updated record, or 404 if the budget does not exist.
pub async fn update_budget_endpoint(
    State(state): State<UpdateBudgetState>,
    Path(budget_id): Path<BudgetId>,
    Json(change): Json<BudgetLimitChange>,
) -> Result<Json<Budget>, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    let budget = update_budget_limit(budget_id, change.monthly_limit, &connection)?;

    Ok(Json(budget))
}
