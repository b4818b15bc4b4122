//! Monthly budgets: spending limits per category.
//!
//! This module contains the `Budget` model, its database functions and the
//! JSON route handlers for the `/budgets` resource, plus the page for setting
//! budgets in the browser.

mod core;
mod create_endpoint;
mod create_page;
mod db;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod state;

pub use core::{Budget, BudgetForm, NewBudget};
pub use create_endpoint::create_budget_endpoint;
pub use create_page::{create_budget_form_endpoint, get_budgets_page};
pub use db::{create_budget, create_budget_table, list_budgets};
pub use delete_endpoint::delete_budget_endpoint;
pub use edit_endpoint::edit_budget_endpoint;
pub use get_endpoint::{get_budget_endpoint, list_budgets_endpoint};
pub use state::BudgetState;
