//! Defines the endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use crate::{
    Error,
    db::lock_connection,
    period::PeriodFilter,
    record_id::RecordId,
    transaction::{
        Transaction, TransactionState,
        db::{get_transaction, list_transactions},
    },
};

/// A route handler for listing transactions, optionally limited to a month
/// and/or year with the `month` and `year` query parameters.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    filter: Result<Query<PeriodFilter>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let Query(filter) = filter?;
    let filter = filter.validate()?;

    let connection = lock_connection(&state.db_connection)?;

    list_transactions(filter, &connection).map(Json)
}

/// A route handler for getting a single transaction by its ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, Error> {
    let transaction_id = RecordId::parse(&transaction_id)?;

    let connection = lock_connection(&state.db_connection)?;

    get_transaction(transaction_id, &connection).map(Json)
}
