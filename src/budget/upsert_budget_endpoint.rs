//! Defines the endpoint for creating or overwriting a budget.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{Budget, NewBudget, UpsertedBudget, core::upsert_budget},
};

/// The state needed to upsert a budget.
#[derive(Debug, Clone)]
pub struct UpsertBudgetState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpsertBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a budget, or overwriting the monthly limit
/// of the existing budget for the same category.
///
/// Returns 201 with the record when the category had no budget, 200 when an
/// existing budget was overwritten.
pub async fn upsert_budget_endpoint(
    State(state): State<UpsertBudgetState>,
    Json(new_budget): Json<NewBudget>,
) -> Result<(StatusCode, Json<Budget>), Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    match upsert_budget(new_budget, &connection)? {
        UpsertedBudget::Created(budget) => Ok((StatusCode::CREATED, Json(budget))),
        UpsertedBudget::Updated(budget) => Ok((StatusCode::OK, Json(budget))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode};
    use rusqlite::Connection;

    use crate::{
        budget::{NewBudget, count_budgets},
        initialize_db,
    };

    use super::{UpsertBudgetState, upsert_budget_endpoint};

    fn get_test_state() -> UpsertBudgetState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        UpsertBudgetState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn food_budget(limit: f64) -> NewBudget {
        NewBudget {
            category: "Food".to_owned(),
            monthly_limit: limit,
        }
    }

    #[tokio::test]
    async fn first_post_returns_201() {
        let state = get_test_state();

        let (status, Json(budget)) =
            upsert_budget_endpoint(State(state), Json(food_budget(100.0)))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(budget.category, "Food");
        assert_eq!(budget.monthly_limit, 100.0);
    }

    #[tokio::test]
    async fn repeated_post_returns_200_and_keeps_one_record() {
        let state = get_test_state();

        upsert_budget_endpoint(State(state.clone()), Json(food_budget(100.0)))
            .await
            .unwrap();
        let (status, Json(budget)) =
            upsert_budget_endpoint(State(state.clone()), Json(food_budget(250.0)))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(budget.monthly_limit, 250.0);

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_budgets(&connection).unwrap(), 1);
    }
}
