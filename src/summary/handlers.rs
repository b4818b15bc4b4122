//! Route handlers for the summary endpoints and the dashboard page.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    budget::{Budget, list_budgets},
    db::lock_connection,
    html::{base, echarts_script},
    period::{Period, PeriodFilter},
    summary::{
        Language,
        aggregation::{PeriodSummary, YearlySummary},
        charts::{
            DashboardChart, balance_chart, charts_script, expense_share_chart,
            income_expense_chart,
        },
        view::dashboard_view,
    },
    transaction::{Transaction, list_transactions},
};

/// The state needed to compute summaries.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions and budgets.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, used to find the
    /// current month.
    pub local_timezone: String,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters of the summary endpoints and the dashboard.
///
/// Missing values default to the current month and Czech.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// The month of the year to summarise.
    pub month: Option<u8>,
    /// The year to summarise.
    pub year: Option<i32>,
    /// The display language of the dashboard.
    #[serde(default)]
    pub lang: Language,
}

/// Get the transactions and budgets needed to summarise `period`.
///
/// The database lock is released before returning, so the aggregation runs
/// without blocking other requests.
fn load_records(
    db_connection: &Mutex<Connection>,
    period: Period,
) -> Result<(Vec<Transaction>, Vec<Budget>), Error> {
    let connection = lock_connection(db_connection)?;

    let transactions = list_transactions(PeriodFilter::default(), &connection)
        .inspect_err(|error| tracing::error!("Could not get transactions: {error}"))?;
    let budgets = list_budgets(
        PeriodFilter {
            month: Some(period.month),
            year: Some(period.year),
        },
        &connection,
    )
    .inspect_err(|error| tracing::error!("Could not get budgets for {period:?}: {error}"))?;

    Ok((transactions, budgets))
}

/// A route handler for the aggregate views of one month.
pub async fn get_period_summary(
    State(state): State<SummaryState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<PeriodSummary>, Error> {
    let Query(query) = query?;
    let period = Period::from_parts_or_current(query.month, query.year, &state.local_timezone)?;

    let (transactions, budgets) = load_records(&state.db_connection, period)?;

    Ok(Json(PeriodSummary::build(&transactions, &budgets, period)))
}

/// The query parameters of the yearly summary endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct YearQuery {
    /// The year to summarise, defaults to the current year.
    pub year: Option<i32>,
}

/// A route handler for the per-month series of one year.
pub async fn get_yearly_summary(
    State(state): State<SummaryState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<YearlySummary>, Error> {
    let Query(query) = query?;
    let year = match query.year {
        Some(year) => year,
        None => Period::current(&state.local_timezone)?.year,
    };

    let transactions = {
        let connection = lock_connection(&state.db_connection)?;
        list_transactions(PeriodFilter::default(), &connection)?
    };

    Ok(Json(YearlySummary::build(&transactions, year)))
}

/// Display a page with an overview of the user's finances.
pub async fn get_dashboard_page(
    State(state): State<SummaryState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Response {
    build_dashboard_page(state, query).unwrap_or_else(Error::into_html_response)
}

fn build_dashboard_page(
    state: SummaryState,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(query) = query?;
    let language = query.lang;
    let period = Period::from_parts_or_current(query.month, query.year, &state.local_timezone)?;

    let (transactions, budgets) = load_records(&state.db_connection, period)?;

    let summary = PeriodSummary::build(&transactions, &budgets, period);
    let yearly = YearlySummary::build(&transactions, period.year);
    let charts = build_dashboard_charts(&summary, &yearly, language);

    let content = dashboard_view(&summary, &charts, language);
    let head_elements = [echarts_script(), charts_script(&charts)];

    Ok(base(
        language.texts().title,
        language.html_code(),
        &head_elements,
        &content,
    )
    .into_response())
}

/// Creates the dashboard charts. The chart options are serialized to JSON
/// for ECharts.
fn build_dashboard_charts(
    summary: &PeriodSummary,
    yearly: &YearlySummary,
    language: Language,
) -> [DashboardChart; 3] {
    [
        DashboardChart {
            id: "balance-chart",
            options: balance_chart(yearly, language).to_string(),
        },
        DashboardChart {
            id: "income-expense-chart",
            options: income_expense_chart(yearly, language).to_string(),
        },
        DashboardChart {
            id: "expense-share-chart",
            options: expense_share_chart(&summary.expense_shares, language).to_string(),
        },
    ]
}
