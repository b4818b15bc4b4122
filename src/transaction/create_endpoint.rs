//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    db::lock_connection,
    transaction::{Transaction, TransactionForm, TransactionState, create_transaction},
};

/// A route handler for creating a new transaction.
///
/// The body is validated before the database is touched. Responds with
/// `201 Created` and the stored transaction, including its new ID.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let Json(form) = payload?;
    let new_transaction = form.validate()?;

    let connection = lock_connection(&state.db_connection)?;

    let transaction = create_transaction(new_transaction, &connection)
        .inspect_err(|error| tracing::error!("Could not create transaction: {error}"))?;

    tracing::debug!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
