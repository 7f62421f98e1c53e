//! Spending totals grouped by category, across all recorded expenses.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

/// Total expense spending for one category, with its share of all expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// The category the expenses were recorded under.
    pub category: String,
    /// The sum of expense amounts in the category.
    pub total: f64,
    /// The category's share of all expense spending, from 0 to 100.
    pub percentage: f64,
}

/// Sum expense amounts per category across all of `transactions`.
///
/// Income transactions are ignored. Percentages are shares of the overall
/// expense total and are zero when there are no expenses at all. The result
/// is sorted by total descending, with the category name breaking ties so
/// the order is stable across recomputations.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.kind == TransactionKind::Expense {
            *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
        }
    }

    let expense_total: f64 = totals.values().sum();

    let mut entries: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_owned(),
            total,
            percentage: if expense_total > 0.0 {
                total / expense_total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    entries
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, macros::date};

    use crate::transaction::{Transaction, TransactionKind};

    use super::category_totals;

    fn transaction(amount: f64, kind: TransactionKind, category: &str) -> Transaction {
        Transaction {
            id: 1,
            amount,
            description: "test".to_owned(),
            date: date!(2025 - 03 - 15),
            kind,
            category: category.to_owned(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn sums_expenses_per_category() {
        let transactions = [
            transaction(30.0, TransactionKind::Expense, "Food"),
            transaction(20.0, TransactionKind::Expense, "Food"),
            transaction(50.0, TransactionKind::Expense, "Transport"),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, 50.0);
        assert_eq!(totals[1].category, "Transport");
        assert_eq!(totals[1].total, 50.0);
    }

    #[test]
    fn ignores_income() {
        let transactions = [
            transaction(30.0, TransactionKind::Expense, "Food"),
            transaction(1000.0, TransactionKind::Income, "Salary"),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "Food");
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let transactions = [
            transaction(75.0, TransactionKind::Expense, "Food"),
            transaction(25.0, TransactionKind::Expense, "Transport"),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals[0].percentage, 75.0);
        assert_eq!(totals[1].percentage, 25.0);
    }

    #[test]
    fn sorts_by_total_descending_then_category() {
        let transactions = [
            transaction(10.0, TransactionKind::Expense, "Transport"),
            transaction(10.0, TransactionKind::Expense, "Food"),
            transaction(99.0, TransactionKind::Expense, "Rent"),
        ];

        let totals = category_totals(&transactions);

        let categories: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, ["Rent", "Food", "Transport"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn income_only_yields_empty_output() {
        let transactions = [transaction(1000.0, TransactionKind::Income, "Salary")];

        assert!(category_totals(&transactions).is_empty());
    }
}
