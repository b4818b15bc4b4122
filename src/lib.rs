//! MoneyMap is a personal finance tracker.
//!
//! This library provides a JSON REST API for recording transactions and
//! monthly budgets, a set of pure aggregation functions that derive the
//! dashboard views from those records, and a server-rendered dashboard page.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod budget;
mod db;
mod endpoints;
mod html;
mod logging;
mod navigation;
mod not_found;
mod period;
mod record_id;
mod routing;
mod summary;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use budget::{Budget, BudgetForm, NewBudget, create_budget};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use period::{Period, RecordDate};
pub use record_id::RecordId;
pub use routing::build_router;
pub use summary::{Language, aggregation, category::category_label};
pub use timezone::is_valid_timezone;
pub use transaction::{NewTransaction, Transaction, TransactionForm, create_transaction};

use crate::html::error_view;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be read as the expected JSON object.
    #[error("invalid request body: {0}")]
    InvalidPayload(String),

    /// The query string could not be read, e.g. a month that is not a number.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// A field that is needed to create a record was not provided.
    #[error("the field \"{0}\" is required")]
    MissingField(&'static str),

    /// The amount was not a usable number, e.g. zero for a budget.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A month outside of 1 to 12.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth(u8),

    /// A day of the month outside of 1 to 31.
    #[error("{0} is not a valid day, expected a number from 1 to 31")]
    InvalidDay(u8),

    /// A combined date string that is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("could not parse the date \"{0}\", expected YYYY-MM-DD or an RFC 3339 date-time")]
    InvalidDate(String),

    /// The string used to identify a record is not a valid ID.
    ///
    /// This is reported as "not found" to clients since no record can have
    /// that ID.
    #[error("\"{0}\" is not a valid ID")]
    InvalidId(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to update a budget that does not exist
    #[error("tried to update a budget that is not in the database")]
    UpdateMissingBudget,

    /// Tried to delete a budget that does not exist
    #[error("tried to delete a budget that is not in the database")]
    DeleteMissingBudget,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The configured timezone is not a valid, canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidPayload(rejection.body_text())
    }
}

impl From<FormRejection> for Error {
    fn from(rejection: FormRejection) -> Self {
        Error::InvalidPayload(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidQuery(rejection.body_text())
    }
}

/// The JSON body sent to clients when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidPayload(_)
            | Error::InvalidQuery(_)
            | Error::MissingField(_)
            | Error::InvalidAmount(_)
            | Error::InvalidMonth(_)
            | Error::InvalidDay(_)
            | Error::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Error::InvalidId(_)
            | Error::NotFound
            | Error::UpdateMissingTransaction
            | Error::DeleteMissingTransaction
            | Error::UpdateMissingBudget
            | Error::DeleteMissingBudget => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError | Error::InvalidTimezoneError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message that is safe to show to clients.
    fn client_message(&self) -> String {
        match self {
            Error::InvalidTimezoneError(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            // The details of other server errors are only meant for the server logs.
            Error::SqlError(_) | Error::DatabaseLockError => {
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
            error => error.to_string(),
        }
    }

    /// Render the error as a full HTML page instead of JSON.
    ///
    /// Used by the dashboard, which is viewed in a browser.
    fn into_html_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        let header = status.as_u16().to_string();
        let description = status.canonical_reason().unwrap_or("Error");

        (
            status,
            error_view(description, &header, description, &self.client_message()),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}
