//! Defines the endpoint for updating a budget.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    Error,
    budget::{
        Budget, BudgetForm, BudgetState,
        db::{get_budget, update_budget},
    },
    db::lock_connection,
    record_id::RecordId,
};

/// A route handler for updating a budget.
///
/// Fields missing from the body keep their stored values.
pub async fn edit_budget_endpoint(
    State(state): State<BudgetState>,
    Path(budget_id): Path<String>,
    payload: Result<Json<BudgetForm>, JsonRejection>,
) -> Result<Json<Budget>, Error> {
    let budget_id = RecordId::parse(&budget_id)?;
    let Json(form) = payload?;

    let connection = lock_connection(&state.db_connection)?;

    let existing = get_budget(budget_id, &connection).map_err(|error| match error {
        Error::NotFound => Error::UpdateMissingBudget,
        error => error,
    })?;

    let replacement = form.apply_to(&existing)?;

    update_budget(budget_id, replacement, &connection)
        .inspect_err(|error| tracing::error!("Could not update budget {budget_id}: {error}"))
        .map(Json)
}
