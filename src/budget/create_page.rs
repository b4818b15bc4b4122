//! Defines the page for viewing and setting this month's budgets in the browser.

use axum::{
    Form,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    budget::{BudgetForm, BudgetState, create_budget, list_budgets},
    db::lock_connection,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE, SECTION_HEADER_STYLE, base,
    },
    navigation::{NavBar, page_href},
    period::{Period, PeriodFilter},
    summary::{
        Language,
        aggregation::{BudgetUtilization, budget_utilization},
        category::{EXPENSE_CATEGORIES, category_label},
        language::LanguageQuery,
        view::budgets_view,
    },
    transaction::list_transactions,
};

/// The form data sent by the page for adding a budget.
///
/// The budget is always for the current month.
#[derive(Debug, Deserialize)]
pub struct BudgetPageForm {
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
    /// The language of the page the form was sent from.
    #[serde(default)]
    pub lang: Language,
}

impl From<BudgetPageForm> for BudgetForm {
    fn from(form: BudgetPageForm) -> Self {
        BudgetForm {
            category: Some(form.category),
            amount: Some(form.amount),
            notes: Some(form.notes),
            month: None,
            year: None,
        }
    }
}

/// Renders the utilization of this month's budgets next to the form for
/// adding one.
pub async fn get_budgets_page(
    State(state): State<BudgetState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Response {
    build_budgets_page(state, query).unwrap_or_else(Error::into_html_response)
}

fn build_budgets_page(
    state: BudgetState,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(LanguageQuery { lang }) = query?;
    let period = Period::current(&state.local_timezone)?;
    let filter = PeriodFilter {
        month: Some(period.month),
        year: Some(period.year),
    };

    let (budgets, transactions) = {
        let connection = lock_connection(&state.db_connection)?;
        let budgets = list_budgets(filter, &connection)
            .inspect_err(|error| tracing::error!("Could not get budgets for {period:?}: {error}"))?;
        let transactions = list_transactions(filter, &connection)
            .inspect_err(|error| tracing::error!("Could not get transactions: {error}"))?;

        (budgets, transactions)
    };

    let utilization = budget_utilization(&budgets, &transactions, period);

    Ok(budgets_page_view(&utilization, period, lang).into_response())
}

/// A route handler for the form on the budgets page.
///
/// Redirects back to the page on success.
pub async fn create_budget_form_endpoint(
    State(state): State<BudgetState>,
    form: Result<Form<BudgetPageForm>, FormRejection>,
) -> Response {
    match store_budget(state, form) {
        Ok(language) => {
            Redirect::to(&page_href(endpoints::BUDGETS_VIEW, None, language)).into_response()
        }
        Err(error) => error.into_html_response(),
    }
}

fn store_budget(
    state: BudgetState,
    form: Result<Form<BudgetPageForm>, FormRejection>,
) -> Result<Language, Error> {
    let Form(form) = form?;
    let language = form.lang;

    let current = Period::current(&state.local_timezone)?;
    let new_budget = BudgetForm::from(form).validate(current)?;

    let connection = lock_connection(&state.db_connection)?;
    let budget = create_budget(new_budget, &connection)
        .inspect_err(|error| tracing::error!("Could not create budget: {error}"))?;

    tracing::debug!("Created budget {} from the budgets page", budget.id);

    Ok(language)
}

fn budgets_page_view(
    utilization: &[BudgetUtilization],
    period: Period,
    language: Language,
) -> Markup {
    let texts = language.texts();

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            (NavBar::new(endpoints::BUDGETS_VIEW, language).into_html())

            h1 class="text-4xl md:text-5xl font-extrabold mb-3 tracking-tight" { (texts.budgets_title) }
            p class={ "text-xl mb-10 " (MUTED_TEXT_STYLE) } { (texts.budgets_subtitle) }

            div class="grid grid-cols-1 lg:grid-cols-2 gap-8"
            {
                div
                {
                    p id="budget-period" class={ "mb-2 " (MUTED_TEXT_STYLE) }
                    {
                        (texts.budgets_this_month) " (" (period.month) "/" (period.year) ")"
                    }

                    (budgets_view(utilization, language))
                }

                section class=(CARD_STYLE)
                {
                    h2 class=(SECTION_HEADER_STYLE) { (texts.add_budget) }
                    (budget_form(language))
                }
            }
        }
    );

    base(texts.budgets_title, language.html_code(), &[], &content)
}

fn budget_form(language: Language) -> Markup {
    let texts = language.texts();

    html!(
        form method="post" action=(endpoints::BUDGETS_VIEW) class="space-y-4"
        {
            input type="hidden" name="lang" value=(language.query_code());

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { (texts.category_field) }

                select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in EXPENSE_CATEGORIES {
                        option value=(category) { (category_label(category, language)) }
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
                    step="1"
                    min="1"
                    placeholder="0"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="notes" class=(FORM_LABEL_STYLE) { (texts.notes_field) }

                input name="notes" id="notes" type="text" class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (texts.add_budget) }
        }
    )
}
