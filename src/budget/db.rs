//! Database operations for budgets.

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    budget::{Budget, NewBudget},
    period::PeriodFilter,
    record_id::RecordId,
};

const COLUMNS: &str = "id, category, amount, month, year, notes";

/// Create a budget and return it with its generated ID.
pub fn create_budget(budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    connection
        .prepare(&format!(
            "INSERT INTO budget ({COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        ))?
        .query_row(
            params![
                RecordId::new(),
                budget.category,
                budget.amount,
                budget.period.month,
                budget.period.year,
                budget.notes,
            ],
            map_budget_row,
        )
        .map_err(Error::from)
}

/// Retrieve a budget by its `id`.
///
/// # Errors
/// Returns [Error::NotFound] if there is no budget with `id`.
pub fn get_budget(id: RecordId, connection: &Connection) -> Result<Budget, Error> {
    connection
        .prepare(&format!("SELECT {COLUMNS} FROM budget WHERE id = :id"))?
        .query_one(&[(":id", &id)], map_budget_row)
        .map_err(Error::from)
}

/// Retrieve the budgets matching `filter` in insertion order.
pub fn list_budgets(filter: PeriodFilter, connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM budget
             WHERE (?1 IS NULL OR month = ?1) AND (?2 IS NULL OR year = ?2)
             ORDER BY rowid ASC"
        ))?
        .query_map(params![filter.month, filter.year], map_budget_row)?
        .map(|maybe_budget| maybe_budget.map_err(Error::from))
        .collect()
}

/// Replace every field of the budget `id` except the ID itself.
///
/// # Errors
/// Returns [Error::UpdateMissingBudget] if there is no budget with `id`.
pub fn update_budget(id: RecordId, budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    connection
        .prepare(&format!(
            "UPDATE budget
             SET category = ?1, amount = ?2, month = ?3, year = ?4, notes = ?5
             WHERE id = ?6
             RETURNING {COLUMNS}"
        ))?
        .query_row(
            params![
                budget.category,
                budget.amount,
                budget.period.month,
                budget.period.year,
                budget.notes,
                id,
            ],
            map_budget_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingBudget,
            error => error.into(),
        })
}

/// Delete a budget by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingBudget] if there is no budget with `id`.
pub fn delete_budget(id: RecordId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM budget WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingBudget);
    }

    Ok(())
}

/// Create the budget table in the database.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget (
            id TEXT PRIMARY KEY NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL CHECK (amount > 0),
            month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
            year INTEGER NOT NULL,
            notes TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_budget_period ON budget(year, month);",
    )
}

fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        amount: row.get(2)?,
        month: row.get(3)?,
        year: row.get(4)?,
        notes: row.get(5)?,
    })
}
