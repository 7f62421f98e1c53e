//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the payload types for creating and updating them
//! - Database functions for storing, querying, and managing transactions
//! - JSON endpoint handlers for the transaction routes

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;
mod update_transaction_endpoint;

pub use core::{
    MAX_DESCRIPTION_LENGTH, NewTransaction, Transaction, TransactionChanges, TransactionKind,
    create_transaction_table, get_all_transactions,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;
pub use update_transaction_endpoint::update_transaction_endpoint;

#[cfg(test)]
pub use core::{count_transactions, create_transaction, get_transaction};
