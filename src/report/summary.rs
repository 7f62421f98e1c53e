//! The overall income and expense summary.

use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

/// Income, expenses, and net balance across all recorded transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// Income minus expenses. Negative when spending exceeds income.
    pub net_balance: f64,
    /// How many income transactions have been recorded.
    pub income_count: u32,
    /// How many expense transactions have been recorded.
    pub expense_count: u32,
}

/// Sum all income and expense transactions into a single summary.
pub fn financial_summary(transactions: &[Transaction]) -> FinancialSummary {
    let mut summary = FinancialSummary {
        total_income: 0.0,
        total_expenses: 0.0,
        net_balance: 0.0,
        income_count: 0,
        expense_count: 0,
    };

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => {
                summary.total_income += transaction.amount;
                summary.income_count += 1;
            }
            TransactionKind::Expense => {
                summary.total_expenses += transaction.amount;
                summary.expense_count += 1;
            }
        }
    }

    summary.net_balance = summary.total_income - summary.total_expenses;

    summary
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, macros::date};

    use crate::transaction::{Transaction, TransactionKind};

    use super::financial_summary;

    fn transaction(amount: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: 1,
            amount,
            description: "test".to_owned(),
            date: date!(2025 - 03 - 15),
            kind,
            category: "General".to_owned(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn sums_income_and_expenses_separately() {
        let transactions = [
            transaction(1000.0, TransactionKind::Income),
            transaction(200.0, TransactionKind::Expense),
            transaction(300.0, TransactionKind::Expense),
        ];

        let summary = financial_summary(&transactions);

        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 500.0);
        assert_eq!(summary.net_balance, 500.0);
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 2);
    }

    #[test]
    fn net_balance_can_be_negative() {
        let transactions = [
            transaction(100.0, TransactionKind::Income),
            transaction(250.0, TransactionKind::Expense),
        ];

        let summary = financial_summary(&transactions);

        assert_eq!(summary.net_balance, -150.0);
    }

    #[test]
    fn empty_input_yields_all_zeroes() {
        let summary = financial_summary(&[]);

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.net_balance, 0.0);
        assert_eq!(summary.income_count, 0);
        assert_eq!(summary.expense_count, 0);
    }
}
