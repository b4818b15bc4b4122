//! Defines the endpoint for creating a new budget.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    budget::{Budget, BudgetForm, BudgetState, create_budget},
    db::lock_connection,
    period::Period,
};

/// A route handler for creating a new budget.
///
/// A budget without a `month` or `year` is placed in the current month.
pub async fn create_budget_endpoint(
    State(state): State<BudgetState>,
    payload: Result<Json<BudgetForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Budget>), Error> {
    let Json(form) = payload?;

    let current = Period::current(&state.local_timezone)?;
    let new_budget = form.validate(current)?;

    let connection = lock_connection(&state.db_connection)?;

    let budget = create_budget(new_budget, &connection)
        .inspect_err(|error| tracing::error!("Could not create budget: {error}"))?;

    tracing::debug!("Created budget {} for {}", budget.id, budget.category);

    Ok((StatusCode::CREATED, Json(budget)))
}
