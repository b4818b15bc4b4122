//! Defines the endpoints for reading budgets.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::{
    Error,
    budget::{
        Budget, BudgetState,
        db::{get_budget, list_budgets},
    },
    db::lock_connection,
    period::PeriodFilter,
    record_id::RecordId,
};

/// A route handler for listing budgets, optionally limited to a month and/or
/// year.
pub async fn list_budgets_endpoint(
    State(state): State<BudgetState>,
    filter: Result<Query<PeriodFilter>, QueryRejection>,
) -> Result<Json<Vec<Budget>>, Error> {
    let Query(filter) = filter?;
    let filter = filter.validate()?;

    let connection = lock_connection(&state.db_connection)?;

    list_budgets(filter, &connection).map(Json)
}

/// A route handler for getting a single budget by its ID.
pub async fn get_budget_endpoint(
    State(state): State<BudgetState>,
    Path(budget_id): Path<String>,
) -> Result<Json<Budget>, Error> {
    let budget_id = RecordId::parse(&budget_id)?;

    let connection = lock_connection(&state.db_connection)?;

    get_budget(budget_id, &connection).map(Json)
}
