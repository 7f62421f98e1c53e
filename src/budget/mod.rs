//! Budget management for the finance tracker.
//!
//! A budget assigns a monthly spending ceiling to one category. There is at
//! most one budget per category, enforced by the database and an atomic
//! upsert on the create endpoint.

mod core;
mod delete_budget_endpoint;
mod list_budgets_endpoint;
mod update_budget_endpoint;
mod upsert_budget_endpoint;

pub use core::{Budget, NewBudget, UpsertedBudget, create_budget_table, get_all_budgets};
pub use delete_budget_endpoint::delete_budget_endpoint;
pub use list_budgets_endpoint::list_budgets_endpoint;
pub use update_budget_endpoint::update_budget_endpoint;
pub use upsert_budget_endpoint::upsert_budget_endpoint;

#[cfg(test)]
pub use core::{count_budgets, upsert_budget};
