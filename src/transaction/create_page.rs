//! Defines the page for viewing and adding transactions in the browser.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{
        FromRef, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    db::lock_connection,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, MUTED_TEXT_STYLE,
        PAGE_CONTAINER_STYLE, SECTION_HEADER_STYLE, base,
    },
    navigation::{NavBar, page_href},
    period::PeriodFilter,
    summary::{
        Language,
        aggregation::{RECENT_TRANSACTION_COUNT, recent_transactions},
        category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, category_label},
        language::LanguageQuery,
        view::recent_transactions_view,
    },
    timezone::local_today,
    transaction::{Transaction, TransactionForm, create_transaction, list_transactions},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Prague".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// The form data sent by the page for adding a transaction.
///
/// The amount is entered as a positive number and signed by `type_`.
#[derive(Debug, Deserialize)]
pub struct TransactionPageForm {
    pub type_: TransactionType,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    /// The date as sent by a date input, e.g. "2026-02-14".
    pub date: String,
    /// The language of the page the form was sent from.
    #[serde(default)]
    pub lang: Language,
}

impl From<TransactionPageForm> for TransactionForm {
    fn from(form: TransactionPageForm) -> Self {
        let amount = match form.type_ {
            TransactionType::Income => form.amount.abs(),
            TransactionType::Expense => -form.amount.abs(),
        };

        TransactionForm {
            amount: Some(amount),
            category: Some(form.category),
            notes: Some(form.notes),
            date: Some(form.date),
            ..Default::default()
        }
    }
}

/// Renders the page listing the newest transactions next to the form for
/// adding one.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Response {
    build_transactions_page(state, query).unwrap_or_else(Error::into_html_response)
}

fn build_transactions_page(
    state: TransactionsPageState,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(LanguageQuery { lang }) = query?;
    let today = local_today(&state.local_timezone)?;

    let transactions = {
        let connection = lock_connection(&state.db_connection)?;
        list_transactions(PeriodFilter::default(), &connection)
            .inspect_err(|error| tracing::error!("Could not get transactions: {error}"))?
    };

    let recent: Vec<Transaction> = recent_transactions(&transactions, RECENT_TRANSACTION_COUNT)
        .into_iter()
        .cloned()
        .collect();

    Ok(transactions_page_view(&recent, today, lang).into_response())
}

/// A route handler for the form on the transactions page.
///
/// Redirects back to the page on success.
pub async fn create_transaction_form_endpoint(
    State(state): State<TransactionsPageState>,
    form: Result<Form<TransactionPageForm>, FormRejection>,
) -> Response {
    match store_transaction(state, form) {
        Ok(language) => {
            Redirect::to(&page_href(endpoints::TRANSACTIONS_VIEW, None, language)).into_response()
        }
        Err(error) => error.into_html_response(),
    }
}

fn store_transaction(
    state: TransactionsPageState,
    form: Result<Form<TransactionPageForm>, FormRejection>,
) -> Result<Language, Error> {
    let Form(form) = form?;
    let language = form.lang;
    let new_transaction = TransactionForm::from(form).validate()?;

    let connection = lock_connection(&state.db_connection)?;
    let transaction = create_transaction(new_transaction, &connection)
        .inspect_err(|error| tracing::error!("Could not create transaction: {error}"))?;

    tracing::debug!("Created transaction {} from the transactions page", transaction.id);

    Ok(language)
}

fn transactions_page_view(recent: &[Transaction], today: Date, language: Language) -> Markup {
    let texts = language.texts();

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            (NavBar::new(endpoints::TRANSACTIONS_VIEW, language).into_html())

            h1 class="text-4xl md:text-5xl font-extrabold mb-3 tracking-tight" { (texts.transactions_title) }
            p class={ "text-xl mb-10 " (MUTED_TEXT_STYLE) } { (texts.transactions_subtitle) }

            div class="grid grid-cols-1 lg:grid-cols-2 gap-8"
            {
                (recent_transactions_view(recent, language))

                section class=(CARD_STYLE)
                {
                    h2 class=(SECTION_HEADER_STYLE) { (texts.add_transaction) }
                    (transaction_form(today, language))
                }
            }
        }
    );

    base(texts.transactions_title, language.html_code(), &[], &content)
}

fn transaction_form(today: Date, language: Language) -> Markup {
    let texts = language.texts();

    html!(
        form method="post" action=(endpoints::TRANSACTIONS_VIEW) class="space-y-4"
        {
            input type="hidden" name="lang" value=(language.query_code());

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { (texts.transaction_type) }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id="transaction-type-income"
                            type="radio"
                            value="income"
                            checked
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for="transaction-type-income" class=(FORM_RADIO_LABEL_STYLE) { (texts.income_type) }
                    }

                    div class="flex items-center gap-3"
                    {
                        input
                            name="type_"
                            id="transaction-type-expense"
                            type="radio"
                            value="expense"
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for="transaction-type-expense" class=(FORM_RADIO_LABEL_STYLE) { (texts.expense_type) }
                    }
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { (texts.amount_field) }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { (texts.category_field) }

                select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    optgroup label=(texts.income_type)
                    {
                        @for category in INCOME_CATEGORIES {
                            option value=(category) { (category_label(category, language)) }
                        }
                    }

                    optgroup label=(texts.expense_type)
                    {
                        @for category in EXPENSE_CATEGORIES {
                            option value=(category) { (category_label(category, language)) }
                        }
                    }
                }
            }

            div
            {
                label for="notes" class=(FORM_LABEL_STYLE) { (texts.notes_field) }

                input name="notes" id="notes" type="text" class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { (texts.date_field) }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (texts.add_transaction) }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Form,
        body::Body,
        extract::{Query, State},
        http::{StatusCode, header},
        response::Response,
    };
    use rusqlite::Connection;
    use scraper::{ElementRef, Html, Selector};
    use time::OffsetDateTime;

    use crate::{
        db::initialize,
        period::{PeriodFilter, RecordDate},
        summary::{Language, language::LanguageQuery},
        transaction::list_transactions,
    };

    use super::{
        TransactionPageForm, TransactionType, TransactionsPageState,
        create_transaction_form_endpoint, get_transactions_page,
    };

    fn get_test_state() -> TransactionsPageState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        TransactionsPageState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn page_form(type_: TransactionType, amount: f64) -> TransactionPageForm {
        TransactionPageForm {
            type_,
            amount,
            category: "food".to_owned(),
            notes: String::new(),
            date: "2026-02-14".to_owned(),
            lang: Language::En,
        }
    }

    async fn parse_html(response: Response) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        Html::parse_document(&String::from_utf8_lossy(&body))
    }

    #[track_caller]
    fn assert_html_content_type(response: &Response<Body>) {
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();

        assert_eq!(content_type.to_str().unwrap(), "text/html; charset=utf-8");
    }

    fn single<'a>(scope: &'a Html, selector: &str) -> ElementRef<'a> {
        let parsed = Selector::parse(selector).unwrap();
        let elements: Vec<_> = scope.select(&parsed).collect();
        assert_eq!(elements.len(), 1, "want 1 {selector}, got {}", elements.len());

        elements[0]
    }

    #[tokio::test]
    async fn page_has_form() {
        let response = get_transactions_page(
            State(get_test_state()),
            Ok(Query(LanguageQuery { lang: Language::En })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_html_content_type(&response);
        let document = parse_html(response).await;
        assert!(document.errors.is_empty(), "got HTML errors: {:?}", document.errors);

        let form = single(&document, "form");
        assert_eq!(form.value().attr("method"), Some("post"));
        assert_eq!(form.value().attr("action"), Some("/dashboard/transactions"));

        let amount = single(&document, "input[name=amount]");
        assert_eq!(amount.value().attr("type"), Some("number"));
        assert!(amount.value().attr("required").is_some());

        let date = single(&document, "input[name=date]");
        let today = OffsetDateTime::now_utc().date().to_string();
        assert_eq!(date.value().attr("value"), Some(today.as_str()));

        let lang = single(&document, "input[name=lang]");
        assert_eq!(lang.value().attr("value"), Some("en"));

        let selector = Selector::parse("input[name=type_]").unwrap();
        assert_eq!(document.select(&selector).count(), 2);
    }

    #[tokio::test]
    async fn expense_is_stored_as_negative_amount() {
        let state = get_test_state();

        let response = create_transaction_form_endpoint(
            State(state.clone()),
            Ok(Form(page_form(TransactionType::Expense, 250.0))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/dashboard/transactions?lang=en"
        );
        let connection = state.db_connection.lock().unwrap();
        let stored = list_transactions(PeriodFilter::default(), &connection).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, -250.0);
        assert_eq!(stored[0].category, "food");
        assert_eq!(stored[0].notes, None);
        assert_eq!(stored[0].date, RecordDate::new(14, 2, 2026).unwrap());
    }

    #[tokio::test]
    async fn income_is_stored_as_positive_amount() {
        let state = get_test_state();

        create_transaction_form_endpoint(
            State(state.clone()),
            Ok(Form(page_form(TransactionType::Income, -5000.0))),
        )
        .await;

        let connection = state.db_connection.lock().unwrap();
        let stored = list_transactions(PeriodFilter::default(), &connection).unwrap();
        assert_eq!(stored[0].amount, 5000.0);
    }

    #[tokio::test]
    async fn invalid_date_is_bad_request_page() {
        let state = get_test_state();
        let form = TransactionPageForm {
            date: "tomorrow".to_owned(),
            ..page_form(TransactionType::Expense, 10.0)
        };

        let response = create_transaction_form_endpoint(State(state.clone()), Ok(Form(form))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_html_content_type(&response);
        let connection = state.db_connection.lock().unwrap();
        assert!(
            list_transactions(PeriodFilter::default(), &connection)
                .unwrap()
                .is_empty()
        );
    }
}
