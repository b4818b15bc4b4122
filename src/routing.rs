//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::get,
};

use crate::{
    AppState,
    budget::{
        create_budget_endpoint, create_budget_form_endpoint, delete_budget_endpoint,
        edit_budget_endpoint, get_budget_endpoint, get_budgets_page, list_budgets_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    summary::{get_dashboard_page, get_period_summary, get_yearly_summary},
    transaction::{
        create_transaction_endpoint, create_transaction_form_endpoint,
        delete_transaction_endpoint, edit_transaction_endpoint, get_transaction_endpoint,
        get_transactions_page, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_VIEW,
            get(get_transactions_page).post(create_transaction_form_endpoint),
        )
        .route(
            endpoints::BUDGETS_VIEW,
            get(get_budgets_page).post(create_budget_form_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(
            endpoints::BUDGET,
            get(get_budget_endpoint)
                .put(edit_budget_endpoint)
                .delete(delete_budget_endpoint),
        )
        .route(endpoints::PERIOD_SUMMARY, get(get_period_summary))
        .route(endpoints::YEARLY_SUMMARY, get(get_yearly_summary))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
