//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, listing, and deleting transactions
//! - The JSON route handlers for the transactions API

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;

pub use self::core::{
    Transaction, TransactionBuilder, create_transaction, create_transaction_table,
    delete_transaction, get_transactions,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub use self::core::count_transactions;
