//! Fintrack is a web service for tracking personal income, expenses, and
//! monthly category budgets.
//!
//! This library provides a JSON REST API over two SQLite-backed record
//! stores (transactions and budgets) plus a set of read-only report
//! endpoints that recompute derived views (category breakdowns, monthly
//! totals, budget comparisons, spending insights) on every request.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod budget;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod report;
mod routing;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::transaction::MAX_DESCRIPTION_LENGTH;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., ID) are correct and that the resource has been
    /// created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to update a budget that does not exist.
    #[error("tried to update a budget that is not in the database")]
    UpdateMissingBudget,

    /// Tried to delete a budget that does not exist.
    #[error("tried to delete a budget that is not in the database")]
    DeleteMissingBudget,

    /// A negative amount was used to create or update a transaction.
    ///
    /// Amounts are always non-negative; whether money was spent or earned
    /// is carried by the transaction kind instead of the sign.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(f64),

    /// A negative monthly limit was used to create or update a budget.
    #[error("{0} is a negative monthly limit, which is not allowed")]
    NegativeLimit(f64),

    /// A transaction description exceeded the maximum allowed length.
    #[error("the description is {0} characters long, which is over the limit")]
    DescriptionTooLong(usize),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => error_response(
                StatusCode::NOT_FOUND,
                "The requested resource could not be found.",
            ),
            Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                error_response(StatusCode::NOT_FOUND, "Transaction not found.")
            }
            Error::UpdateMissingBudget | Error::DeleteMissingBudget => {
                error_response(StatusCode::NOT_FOUND, "Budget not found.")
            }
            Error::NegativeAmount(amount) => error_response(
                StatusCode::BAD_REQUEST,
                &format!("The amount {amount} is negative, which is not allowed."),
            ),
            Error::NegativeLimit(limit) => error_response(
                StatusCode::BAD_REQUEST,
                &format!("The monthly limit {limit} is negative, which is not allowed."),
            ),
            Error::DescriptionTooLong(length) => error_response(
                StatusCode::BAD_REQUEST,
                &format!(
                    "The description is {length} characters long, \
                    the maximum is {MAX_DESCRIPTION_LENGTH}."
                ),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details.",
                )
            }
        }
    }
}

/// Build a JSON error response `{"error": message}` with the given status code.
pub(crate) fn error_response(status_code: StatusCode, message: &str) -> Response {
    (status_code, Json(json!({ "error": message }))).into_response()
}
