use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The fallback handler for paths that match no route.
///
/// Responds with a 404 and the usual JSON error body.
pub async fn get_404_not_found(uri: Uri) -> Response {
    tracing::debug!("No route for {uri}");

    Error::NotFound.into_response()
}
