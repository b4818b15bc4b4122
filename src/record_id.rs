//! The identifier type shared by transactions and budgets.

use std::{fmt, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// An opaque, unique identifier for a stored record.
///
/// IDs are assigned by the server when a record is created and never change.
/// On the wire and in the database an ID is the hyphenated, lower-case form of
/// a random UUID, e.g. `"67e55044-10b1-426f-9247-bb680e5fe0c8"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from a string such as a URL path segment.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `text` is not a valid ID. Callers should
    /// do this before touching the database.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Uuid::parse_str(text)
            .map(Self)
            .map_err(|_| Error::InvalidId(text.to_owned()))
    }
}

/// The response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedRecord {
    /// The ID of the record that was deleted.
    pub id: RecordId,
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ToSql for RecordId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for RecordId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        Uuid::parse_str(text)
            .map(Self)
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}
