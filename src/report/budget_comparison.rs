//! Budgeted versus actual spending for the current calendar month.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    budget::Budget,
    transaction::{Transaction, TransactionKind},
};

use super::calendar::same_month;

/// Where a category's spending sits relative to its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    /// Spending is below 80% of the monthly limit.
    Under,
    /// Spending is between 80% and 100% of the monthly limit, inclusive.
    OnTrack,
    /// Spending exceeds the monthly limit.
    Over,
}

/// One budgeted category's spending for the current month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    /// The budgeted category.
    pub category: String,
    /// The monthly limit set for the category.
    pub budgeted: f64,
    /// Expense spending in the category so far this month.
    pub actual: f64,
    /// Spending as a percentage of the limit, 0 when the limit is 0.
    pub percentage: f64,
    /// Whether the category is under, on track, or over its budget.
    pub status: BudgetStatus,
}

/// Compare each budget against expense spending in `today`'s calendar month.
///
/// Only expenses dated in the current month count towards a category's
/// actual spending. Categories with a budget but no spending appear with an
/// actual of zero. The result is sorted by percentage descending, with the
/// category name breaking ties.
pub fn compare_budgets(
    transactions: &[Transaction],
    budgets: &[Budget],
    today: Date,
) -> Vec<BudgetComparison> {
    let mut spending: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.kind == TransactionKind::Expense && same_month(transaction.date, today) {
            *spending
                .entry(transaction.category.as_str())
                .or_insert(0.0) += transaction.amount;
        }
    }

    let mut comparisons: Vec<BudgetComparison> = budgets
        .iter()
        .map(|budget| {
            let actual = spending
                .get(budget.category.as_str())
                .copied()
                .unwrap_or(0.0);
            let percentage = if budget.monthly_limit > 0.0 {
                actual / budget.monthly_limit * 100.0
            } else {
                0.0
            };

            BudgetComparison {
                category: budget.category.clone(),
                budgeted: budget.monthly_limit,
                actual,
                percentage,
                status: status_for(percentage),
            }
        })
        .collect();

    comparisons.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    comparisons
}

fn status_for(percentage: f64) -> BudgetStatus {
    if percentage > 100.0 {
        BudgetStatus::Over
    } else if percentage >= 80.0 {
        BudgetStatus::OnTrack
    } else {
        BudgetStatus::Under
    }
}
