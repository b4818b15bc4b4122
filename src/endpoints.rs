//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', replace the
//! parameter with the record's ID.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page that lists transactions and has the form for adding one.
pub const TRANSACTIONS_VIEW: &str = "/dashboard/transactions";
/// The page that shows this month's budgets and has the form for adding one.
pub const BUDGETS_VIEW: &str = "/dashboard/budgets";

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to get, update and delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list and create budgets.
pub const BUDGETS: &str = "/budgets";
/// The route to get, update and delete a single budget.
pub const BUDGET: &str = "/budgets/{budget_id}";
/// The route for the summary of a single month.
pub const PERIOD_SUMMARY: &str = "/summary";
/// The route for the month-by-month series of a year.
pub const YEARLY_SUMMARY: &str = "/summary/yearly";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/budgets/{budget_id}', '{budget_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::{RecordId, endpoints};

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::BUDGETS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::BUDGETS);
        assert_endpoint_is_valid_uri(endpoints::BUDGET);
        assert_endpoint_is_valid_uri(endpoints::PERIOD_SUMMARY);
        assert_endpoint_is_valid_uri(endpoints::YEARLY_SUMMARY);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn formats_record_ids() {
        let id = RecordId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

        let formatted_path = format_endpoint(endpoints::BUDGET, id);

        assert_eq!(
            formatted_path,
            "/budgets/67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
    }
}
