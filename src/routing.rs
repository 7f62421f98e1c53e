//! Application router configuration mapping API routes to their handlers.

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, put},
};

use crate::{
    AppState,
    budget::{
        delete_budget_endpoint, list_budgets_endpoint, update_budget_endpoint,
        upsert_budget_endpoint,
    },
    endpoints, error_response,
    report::{
        budget_comparison_endpoint, category_totals_endpoint, insights_endpoint,
        monthly_expenses_endpoint, summary_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(upsert_budget_endpoint),
        )
        .route(
            endpoints::BUDGET,
            put(update_budget_endpoint).delete(delete_budget_endpoint),
        )
        .route(endpoints::SUMMARY, get(summary_endpoint))
        .route(endpoints::CATEGORY_TOTALS, get(category_totals_endpoint))
        .route(endpoints::MONTHLY_EXPENSES, get(monthly_expenses_endpoint))
        .route(
            endpoints::BUDGET_COMPARISON,
            get(budget_comparison_endpoint),
        )
        .route(endpoints::INSIGHTS, get(insights_endpoint))
        .fallback(get_unknown_route)
        .with_state(state)
}

/// All unknown routes get the same JSON error body as handler errors.
async fn get_unknown_route() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
