//! Expense totals for the trailing six calendar months.

use serde::Serialize;
use time::Date;

use crate::transaction::{Transaction, TransactionKind};

use super::calendar::{month_label, months_back, same_month};

/// How many trailing months the monthly expense report covers.
pub const MONTHS_SHOWN: u32 = 6;

/// Expense activity for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    /// The month, formatted like "Jan 2025".
    pub month: String,
    /// The sum of expense amounts dated in the month.
    pub amount: f64,
    /// How many expense transactions fell in the month.
    pub count: u32,
}

/// Sum expenses per calendar month for the [MONTHS_SHOWN] months ending at
/// `today`'s month.
///
/// The result always contains exactly [MONTHS_SHOWN] entries in chronological
/// order, oldest first. Months with no expenses appear with a zero amount and
/// count. Transactions are bucketed by year and month, so the same month of a
/// different year never matches.
pub fn monthly_expenses(transactions: &[Transaction], today: Date) -> Vec<MonthlyExpense> {
    let months: Vec<Date> = (0..MONTHS_SHOWN)
        .rev()
        .map(|offset| months_back(today, offset))
        .collect();

    let mut entries: Vec<MonthlyExpense> = months
        .iter()
        .map(|&month| MonthlyExpense {
            month: month_label(month),
            amount: 0.0,
            count: 0,
        })
        .collect();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }

        if let Some(index) = months
            .iter()
            .position(|&month| same_month(month, transaction.date))
        {
            entries[index].amount += transaction.amount;
            entries[index].count += 1;
        }
    }

    entries
}
