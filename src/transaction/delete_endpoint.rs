//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    db::lock_connection,
    record_id::{DeletedRecord, RecordId},
    transaction::{TransactionState, db::delete_transaction},
};

/// A route handler for deleting a transaction.
///
/// Responds with the deleted ID, or 404 if there was no such transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<DeletedRecord>, Error> {
    let transaction_id = RecordId::parse(&transaction_id)?;

    let connection = lock_connection(&state.db_connection)?;

    delete_transaction(transaction_id, &connection).inspect_err(|error| {
        tracing::error!("Could not delete transaction {transaction_id}: {error}")
    })?;

    Ok(Json(DeletedRecord { id: transaction_id }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
    };
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        period::{PeriodFilter, RecordDate},
        record_id::{DeletedRecord, RecordId},
        transaction::{
            NewTransaction, TransactionState, create_transaction, delete_transaction_endpoint,
            list_transactions,
        },
    };

    fn get_test_state() -> TransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        create_transaction(
            NewTransaction {
                amount: 10.0,
                category: "gift".to_owned(),
                notes: None,
                date: RecordDate::new(1, 1, 2026).unwrap(),
            },
            &conn,
        )
        .unwrap();

        TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let state = get_test_state();
        let id = {
            let connection = state.db_connection.lock().unwrap();
            list_transactions(PeriodFilter::default(), &connection).unwrap()[0].id
        };

        let Json(deleted) = delete_transaction_endpoint(State(state.clone()), Path(id.to_string()))
            .await
            .unwrap();

        assert_eq!(deleted, DeletedRecord { id });
        let connection = state.db_connection.lock().unwrap();
        assert!(
            list_transactions(PeriodFilter::default(), &connection)
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let state = get_test_state();

        let result =
            delete_transaction_endpoint(State(state.clone()), Path(RecordId::new().to_string()))
                .await;

        assert_eq!(result.err(), Some(Error::DeleteMissingTransaction));
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            list_transactions(PeriodFilter::default(), &connection)
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let state = get_test_state();

        let result = delete_transaction_endpoint(State(state), Path("not-an-id".to_owned())).await;

        assert_eq!(result.err(), Some(Error::InvalidId("not-an-id".to_owned())));
    }
}
