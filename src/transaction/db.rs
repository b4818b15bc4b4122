//! Database operations for transactions.

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    period::{PeriodFilter, RecordDate},
    record_id::RecordId,
    transaction::{NewTransaction, Transaction},
};

const COLUMNS: &str = "id, amount, category, notes, day, month, year";

/// Create a transaction and return it with its generated ID.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(&format!(
            "INSERT INTO \"transaction\" ({COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        ))?
        .query_row(
            params![
                RecordId::new(),
                transaction.amount,
                transaction.category,
                transaction.notes,
                transaction.date.day,
                transaction.date.month,
                transaction.date.year,
            ],
            map_transaction_row,
        )
        .map_err(Error::from)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: RecordId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM \"transaction\" WHERE id = :id"
        ))?
        .query_one(&[(":id", &id)], map_transaction_row)
        .map_err(Error::from)
}

/// Retrieve the transactions matching `filter` in insertion order.
pub fn list_transactions(
    filter: PeriodFilter,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM \"transaction\"
             WHERE (?1 IS NULL OR month = ?1) AND (?2 IS NULL OR year = ?2)
             ORDER BY rowid ASC"
        ))?
        .query_map(params![filter.month, filter.year], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Replace every field of the transaction `id` except the ID itself.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if there is no transaction with `id`.
pub fn update_transaction(
    id: RecordId,
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(&format!(
            "UPDATE \"transaction\"
             SET amount = ?1, category = ?2, notes = ?3, day = ?4, month = ?5, year = ?6
             WHERE id = ?7
             RETURNING {COLUMNS}"
        ))?
        .query_row(
            params![
                transaction.amount,
                transaction.category,
                transaction.notes,
                transaction.date.day,
                transaction.date.month,
                transaction.date.year,
                id,
            ],
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
            error => error.into(),
        })
}

/// Delete a transaction by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if there is no transaction with `id`.
pub fn delete_transaction(id: RecordId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id TEXT PRIMARY KEY NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            notes TEXT,
            day INTEGER NOT NULL CHECK (day BETWEEN 1 AND 31),
            month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
            year INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_period ON \"transaction\"(year, month);",
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let notes = row.get(3)?;
    let day = row.get(4)?;
    let month = row.get(5)?;
    let year = row.get(6)?;

    Ok(Transaction {
        id,
        amount,
        category,
        notes,
        date: RecordDate { year, month, day },
    })
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        period::{PeriodFilter, RecordDate},
        record_id::RecordId,
        transaction::NewTransaction,
    };

    use super::{
        create_transaction, delete_transaction, get_transaction, list_transactions,
        update_transaction,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_transaction(amount: f64, day: u8, month: u8, year: i32) -> NewTransaction {
        NewTransaction {
            amount,
            category: "food".to_owned(),
            notes: None,
            date: RecordDate::new(day, month, year).unwrap(),
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();

        let transaction = create_transaction(new_transaction(-12.3, 5, 10, 2025), &conn)
            .expect("Could not create transaction");

        assert_eq!(transaction.amount, -12.3);
        assert_eq!(transaction.category, "food");
        assert_eq!(transaction.date, RecordDate::new(5, 10, 2025).unwrap());
    }

    #[test]
    fn get_returns_created_transaction() {
        let conn = get_test_connection();
        let created = create_transaction(
            NewTransaction {
                notes: Some("lunch".to_owned()),
                ..new_transaction(-8.5, 1, 2, 2026)
            },
            &conn,
        )
        .unwrap();

        let got = get_transaction(created.id, &conn);

        assert_eq!(got, Ok(created));
    }

    #[test]
    fn get_missing_returns_not_found() {
        let conn = get_test_connection();

        let got = get_transaction(RecordId::new(), &conn);

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let conn = get_test_connection();
        let first = create_transaction(new_transaction(1.0, 9, 1, 2026), &conn).unwrap();
        let second = create_transaction(new_transaction(2.0, 1, 1, 2026), &conn).unwrap();
        let third = create_transaction(new_transaction(3.0, 5, 1, 2026), &conn).unwrap();

        let got = list_transactions(PeriodFilter::default(), &conn).unwrap();

        assert_eq!(got, vec![first, second, third]);
    }

    #[test]
    fn list_filters_by_period() {
        let conn = get_test_connection();
        let january = create_transaction(new_transaction(1.0, 1, 1, 2026), &conn).unwrap();
        create_transaction(new_transaction(2.0, 1, 2, 2026), &conn).unwrap();
        create_transaction(new_transaction(3.0, 1, 1, 2025), &conn).unwrap();

        let got = list_transactions(
            PeriodFilter {
                month: Some(1),
                year: Some(2026),
            },
            &conn,
        )
        .unwrap();

        assert_eq!(got, vec![january]);
    }

    #[test]
    fn list_filters_by_year_only() {
        let conn = get_test_connection();
        create_transaction(new_transaction(1.0, 1, 1, 2026), &conn).unwrap();
        create_transaction(new_transaction(2.0, 1, 2, 2026), &conn).unwrap();
        create_transaction(new_transaction(3.0, 1, 1, 2025), &conn).unwrap();

        let got = list_transactions(
            PeriodFilter {
                month: None,
                year: Some(2026),
            },
            &conn,
        )
        .unwrap();

        assert_eq!(got.len(), 2);
    }

    #[test]
    fn update_replaces_fields() {
        let conn = get_test_connection();
        let created = create_transaction(new_transaction(-1.0, 1, 1, 2026), &conn).unwrap();
        let replacement = NewTransaction {
            amount: 99.0,
            category: "job".to_owned(),
            notes: Some("bonus".to_owned()),
            date: RecordDate::new(28, 2, 2026).unwrap(),
        };

        let updated = update_transaction(created.id, replacement.clone(), &conn).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, replacement.amount);
        assert_eq!(updated.category, replacement.category);
        assert_eq!(updated.notes, replacement.notes);
        assert_eq!(updated.date, replacement.date);
        assert_eq!(get_transaction(created.id, &conn), Ok(updated));
    }

    #[test]
    fn update_missing_returns_error() {
        let conn = get_test_connection();

        let result = update_transaction(RecordId::new(), new_transaction(1.0, 1, 1, 2026), &conn);

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn delete_removes_transaction() {
        let conn = get_test_connection();
        let created = create_transaction(new_transaction(1.0, 1, 1, 2026), &conn).unwrap();

        delete_transaction(created.id, &conn).unwrap();

        assert_eq!(get_transaction(created.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_leaves_store_unchanged() {
        let conn = get_test_connection();
        create_transaction(new_transaction(1.0, 1, 1, 2026), &conn).unwrap();
        let before = list_transactions(PeriodFilter::default(), &conn).unwrap();

        let result = delete_transaction(RecordId::new(), &conn);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
        assert_eq!(
            list_transactions(PeriodFilter::default(), &conn).unwrap(),
            before
        );
    }
}
