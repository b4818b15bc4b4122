//! Defines the endpoint for deleting a budget.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    budget::{BudgetState, db::delete_budget},
    db::lock_connection,
    record_id::{DeletedRecord, RecordId},
};

/// A route handler for deleting a budget.
pub async fn delete_budget_endpoint(
    State(state): State<BudgetState>,
    Path(budget_id): Path<String>,
) -> Result<Json<DeletedRecord>, Error> {
    let budget_id = RecordId::parse(&budget_id)?;

    let connection = lock_connection(&state.db_connection)?;

    delete_budget(budget_id, &connection)
        .inspect_err(|error| tracing::error!("Could not delete budget {budget_id}: {error}"))?;

    Ok(Json(DeletedRecord { id: budget_id }))
}
