//! Defines the endpoint for updating a transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    Error,
    db::lock_connection,
    record_id::RecordId,
    transaction::{
        Transaction, TransactionForm, TransactionState,
        db::{get_transaction, update_transaction},
    },
};

/// A route handler for updating a transaction.
///
/// Fields missing from the body keep their stored values. The merged record is
/// validated before it is written, so an invalid update changes nothing.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let transaction_id = RecordId::parse(&transaction_id)?;
    let Json(form) = payload?;

    let connection = lock_connection(&state.db_connection)?;

    let existing = get_transaction(transaction_id, &connection).map_err(|error| match error {
        Error::NotFound => Error::UpdateMissingTransaction,
        error => error,
    })?;

    let replacement = form.apply_to(&existing)?;

    update_transaction(transaction_id, replacement, &connection)
        .inspect_err(|error| tracing::error!("Could not update transaction {transaction_id}: {error}"))
        .map(Json)
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
        period::RecordDate,
        record_id::RecordId,
        transaction::{
            NewTransaction, Transaction, TransactionForm, TransactionState, create_transaction,
            db::get_transaction, edit_transaction_endpoint,
        },
    };

    fn get_test_state_with_transaction() -> (TransactionState, Transaction) {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let transaction = create_transaction(
            NewTransaction {
                amount: -1200.0,
                category: "food".to_owned(),
                notes: Some("groceries".to_owned()),
                date: RecordDate::new(3, 1, 2026).unwrap(),
            },
            &conn,
        )
        .unwrap();

        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        (state, transaction)
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let (state, transaction) = get_test_state_with_transaction();
        let form = TransactionForm {
            notes: Some("weekly shop".to_owned()),
            ..Default::default()
        };

        let Json(updated) = edit_transaction_endpoint(
            State(state.clone()),
            Path(transaction.id.to_string()),
            Ok(Json(form)),
        )
        .await
        .unwrap();

        let want = Transaction {
            notes: Some("weekly shop".to_owned()),
            ..transaction
        };
        assert_eq!(updated, want);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_transaction(want.id, &connection), Ok(want));
    }

    #[tokio::test]
    async fn full_update_replaces_fields() {
        let (state, transaction) = get_test_state_with_transaction();
        let form = TransactionForm {
            amount: Some(300.0),
            category: Some("gift".to_owned()),
            notes: Some(String::new()),
            day: Some(24),
            month: Some(12),
            year: Some(2025),
            date: None,
        };

        let Json(updated) =
            edit_transaction_endpoint(State(state), Path(transaction.id.to_string()), Ok(Json(form)))
                .await
                .unwrap();

        assert_eq!(
            updated,
            Transaction {
                id: transaction.id,
                amount: 300.0,
                category: "gift".to_owned(),
                notes: None,
                date: RecordDate::new(24, 12, 2025).unwrap(),
            }
        );
    }

    #[tokio::test]
    async fn invalid_update_changes_nothing() {
        let (state, transaction) = get_test_state_with_transaction();
        let form = TransactionForm {
            amount: Some(1.0),
            month: Some(13),
            ..Default::default()
        };

        let result = edit_transaction_endpoint(
            State(state.clone()),
            Path(transaction.id.to_string()),
            Ok(Json(form)),
        )
        .await;

        assert_eq!(result.err(), Some(Error::InvalidMonth(13)));
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_transaction(transaction.id, &connection), Ok(transaction));
    }

    #[tokio::test]
    async fn missing_transaction_is_reported() {
        let (state, _) = get_test_state_with_transaction();

        let result = edit_transaction_endpoint(
            State(state),
            Path(RecordId::new().to_string()),
            Ok(Json(TransactionForm::default())),
        )
        .await;

        assert_eq!(result.err(), Some(Error::UpdateMissingTransaction));
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let (state, _) = get_test_state_with_transaction();

        let result = edit_transaction_endpoint(
            State(state),
            Path("42".to_owned()),
            Ok(Json(TransactionForm::default())),
        )
        .await;

        assert_eq!(result.err(), Some(Error::InvalidId("42".to_owned())));
    }
}
