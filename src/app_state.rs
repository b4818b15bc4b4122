//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, timezone::is_valid_timezone};

/// The state of the REST server.
///
/// The database connection is opened by the caller and handed over here, so
/// the server owns exactly one connection for its whole lifetime. Each route
/// handler borrows it for a single request through a narrower state type.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Prague".
    ///
    /// Used to work out the current month when a request does not name one.
    pub local_timezone: String,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Europe/Prague".
    ///
    /// # Errors
    /// Returns an error if the timezone is unknown or the database cannot be initialized.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        if !is_valid_timezone(local_timezone) {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        initialize(&db_connection)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::Error;

    use super::AppState;

    #[test]
    fn new_rejects_unknown_timezone() {
        let connection = Connection::open_in_memory().unwrap();

        let result = AppState::new(connection, "Atlantis/Capital");

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezoneError("Atlantis/Capital".to_owned()))
        );
    }

    #[test]
    fn new_creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        let state = AppState::new(connection, "Europe/Prague").unwrap();

        let connection = state.db_connection.lock().unwrap();
        let table_count: u32 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                WHERE type = 'table' AND name IN ('transaction', 'budget')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 2);
    }
}
