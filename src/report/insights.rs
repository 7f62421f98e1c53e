//! Heuristic insights into the current month's spending.

use std::collections::HashMap;

use serde::Serialize;
use time::Date;

use crate::{
    budget::Budget,
    transaction::{Transaction, TransactionKind},
};

use super::calendar::{days_in_month, months_back, same_month};

/// The category with the most expense spending this month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    /// The category name.
    pub category: String,
    /// Expense spending in the category so far this month.
    pub amount: f64,
}

/// A snapshot of spending behaviour for `today`'s calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsights {
    /// Expense spending so far this month.
    pub current_month_expenses: f64,
    /// Expense spending over the whole of last month.
    pub last_month_expenses: f64,
    /// Month-over-month change in spending as a percentage. Zero when last
    /// month had no expenses.
    pub spending_change: f64,
    /// The category with the most spending this month, if any.
    pub highest_category: Option<CategorySpend>,
    /// The sum of all budget limits.
    pub total_budget: f64,
    /// This month's spending as a percentage of the total budget. Zero when
    /// no budgets are set.
    pub budget_usage: f64,
    /// Budgeted categories whose spending this month exceeds their limit.
    pub over_budget_categories: Vec<String>,
    /// This month's spending divided by the number of days elapsed.
    pub avg_daily_spending: f64,
    /// The average daily spending extrapolated over the full month.
    pub projected_monthly_spending: f64,
}

/// Derive spending insights for `today`'s calendar month.
///
/// Ties for the highest category go to the lexicographically smaller name.
/// A category is over budget only when its spending strictly exceeds the
/// limit. The projection assumes the daily average so far holds for the rest
/// of the month.
pub fn spending_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    today: Date,
) -> SpendingInsights {
    let last_month = months_back(today, 1);

    let mut current_month_expenses = 0.0;
    let mut last_month_expenses = 0.0;
    let mut category_spending: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        if same_month(transaction.date, today) {
            current_month_expenses += transaction.amount;
            *category_spending
                .entry(transaction.category.as_str())
                .or_insert(0.0) += transaction.amount;
        } else if same_month(transaction.date, last_month) {
            last_month_expenses += transaction.amount;
        }
    }

    let spending_change = if last_month_expenses > 0.0 {
        (current_month_expenses - last_month_expenses) / last_month_expenses * 100.0
    } else {
        0.0
    };

    let highest_category = category_spending
        .iter()
        .max_by(|(category_a, amount_a), (category_b, amount_b)| {
            amount_a
                .partial_cmp(amount_b)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| category_b.cmp(category_a))
        })
        .map(|(&category, &amount)| CategorySpend {
            category: category.to_owned(),
            amount,
        });

    let total_budget: f64 = budgets.iter().map(|budget| budget.monthly_limit).sum();
    let budget_usage = if total_budget > 0.0 {
        current_month_expenses / total_budget * 100.0
    } else {
        0.0
    };

    let over_budget_categories: Vec<String> = budgets
        .iter()
        .filter(|budget| {
            category_spending
                .get(budget.category.as_str())
                .is_some_and(|&spent| spent > budget.monthly_limit)
        })
        .map(|budget| budget.category.clone())
        .collect();

    // today.day() is always at least 1, so the division is safe.
    let avg_daily_spending = current_month_expenses / f64::from(today.day());
    let projected_monthly_spending = avg_daily_spending * f64::from(days_in_month(today));

    SpendingInsights {
        current_month_expenses,
        last_month_expenses,
        spending_change,
        highest_category,
        total_budget,
        budget_usage,
        over_budget_categories,
        avg_daily_spending,
        projected_monthly_spending,
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, OffsetDateTime, macros::date};

    use crate::{
        budget::Budget,
        transaction::{Transaction, TransactionKind},
    };

    use super::spending_insights;

    const TODAY: Date = date!(2025 - 03 - 10);

    fn expense(amount: f64, date: Date, category: &str) -> Transaction {
        Transaction {
            id: 1,
            amount,
            description: "test".to_owned(),
            date,
            kind: TransactionKind::Expense,
            category: category.to_owned(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn budget(category: &str, monthly_limit: f64) -> Budget {
        Budget {
            id: 1,
            category: category.to_owned(),
            monthly_limit,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn separates_current_and_last_month_spending() {
        let transactions = [
            expense(100.0, date!(2025 - 03 - 05), "Food"),
            expense(80.0, date!(2025 - 02 - 20), "Food"),
            expense(999.0, date!(2025 - 01 - 15), "Food"),
        ];

        let insights = spending_insights(&transactions, &[], TODAY);

        assert_eq!(insights.current_month_expenses, 100.0);
        assert_eq!(insights.last_month_expenses, 80.0);
        assert_eq!(insights.spending_change, 25.0);
    }

    #[test]
    fn spending_change_is_zero_when_last_month_was_empty() {
        let transactions = [expense(100.0, date!(2025 - 03 - 05), "Food")];

        let insights = spending_insights(&transactions, &[], TODAY);

        assert_eq!(insights.spending_change, 0.0);
    }

    #[test]
    fn highest_category_covers_the_current_month_only() {
        let transactions = [
            expense(30.0, date!(2025 - 03 - 05), "Food"),
            expense(50.0, date!(2025 - 03 - 06), "Transport"),
            expense(500.0, date!(2025 - 02 - 05), "Rent"),
        ];

        let insights = spending_insights(&transactions, &[], TODAY);

        let highest = insights.highest_category.unwrap();
        assert_eq!(highest.category, "Transport");
        assert_eq!(highest.amount, 50.0);
    }

    #[test]
    fn highest_category_tie_goes_to_the_smaller_name() {
        let transactions = [
            expense(50.0, date!(2025 - 03 - 05), "Transport"),
            expense(50.0, date!(2025 - 03 - 06), "Food"),
        ];

        let insights = spending_insights(&transactions, &[], TODAY);

        assert_eq!(insights.highest_category.unwrap().category, "Food");
    }

    #[test]
    fn highest_category_is_none_without_spending() {
        let insights = spending_insights(&[], &[], TODAY);

        assert!(insights.highest_category.is_none());
    }

    #[test]
    fn budget_usage_is_relative_to_all_limits() {
        let transactions = [expense(50.0, date!(2025 - 03 - 05), "Food")];
        let budgets = [budget("Food", 100.0), budget("Transport", 100.0)];

        let insights = spending_insights(&transactions, &budgets, TODAY);

        assert_eq!(insights.total_budget, 200.0);
        assert_eq!(insights.budget_usage, 25.0);
    }

    #[test]
    fn budget_usage_is_zero_without_budgets() {
        let transactions = [expense(50.0, date!(2025 - 03 - 05), "Food")];

        let insights = spending_insights(&transactions, &[], TODAY);

        assert_eq!(insights.budget_usage, 0.0);
    }

    #[test]
    fn over_budget_requires_strictly_exceeding_the_limit() {
        let transactions = [
            expense(100.0, date!(2025 - 03 - 05), "Food"),
            expense(101.0, date!(2025 - 03 - 05), "Transport"),
        ];
        let budgets = [budget("Food", 100.0), budget("Transport", 100.0)];

        let insights = spending_insights(&transactions, &budgets, TODAY);

        assert_eq!(insights.over_budget_categories, ["Transport"]);
    }

    #[test]
    fn projects_spending_over_the_full_month() {
        // 100 spent over 10 days of a 31-day month.
        let transactions = [expense(100.0, date!(2025 - 03 - 05), "Food")];

        let insights = spending_insights(&transactions, &[], TODAY);

        assert_eq!(insights.avg_daily_spending, 10.0);
        assert_eq!(insights.projected_monthly_spending, 310.0);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let insights = spending_insights(&[], &[], TODAY);

        assert_eq!(insights.current_month_expenses, 0.0);
        assert_eq!(insights.avg_daily_spending, 0.0);
        assert_eq!(insights.projected_monthly_spending, 0.0);
        assert!(insights.over_budget_categories.is_empty());
    }
}
