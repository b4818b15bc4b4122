//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of client input
//! - Database functions for storing, querying, and managing transactions
//! - The JSON route handlers for the `/transactions` resource
//! - The page for adding transactions in the browser

mod core;
mod create_endpoint;
mod create_page;
mod db;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod state;

pub use core::{NewTransaction, Transaction, TransactionForm};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::{create_transaction_form_endpoint, get_transactions_page};
pub use db::{create_transaction, create_transaction_table, list_transactions};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::{get_transaction_endpoint, list_transactions_endpoint};
pub use state::TransactionState;

pub(crate) use core::clean_notes;
