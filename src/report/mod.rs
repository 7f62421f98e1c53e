//! Derived views over the transaction and budget stores.
//!
//! Everything in this module is pure and recomputed on demand: category
//! breakdowns, monthly expense totals, budget-vs-actual comparisons, the
//! income/expense summary, and heuristic spending insights. None of it is
//! ever persisted.
//!
//! The evaluation date is an explicit parameter to every function that
//! depends on it, so tests can supply fixed dates.

mod budget_comparison;
mod calendar;
mod category;
mod handlers;
mod insights;
mod monthly;
mod summary;

pub use budget_comparison::{BudgetComparison, compare_budgets};
pub use category::{CategoryTotal, category_totals};
pub use handlers::{
    budget_comparison_endpoint, category_totals_endpoint, insights_endpoint,
    monthly_expenses_endpoint, summary_endpoint,
};
pub use insights::{SpendingInsights, spending_insights};
pub use monthly::{MonthlyExpense, monthly_expenses};
pub use summary::{FinancialSummary, financial_summary};
