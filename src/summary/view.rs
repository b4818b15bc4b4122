//! HTML views of the dashboard.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        CARD_STYLE, MUTED_TEXT_STYLE, PAGE_CONTAINER_STYLE, SECTION_HEADER_STYLE, format_amount,
        format_currency, format_signed_currency,
    },
    navigation::NavBar,
    summary::{
        Language,
        aggregation::{BudgetUtilization, PeriodSummary, UtilizationLevel},
        category::category_label,
        charts::{DashboardChart, charts_view},
    },
    transaction::Transaction,
};

/// Renders the body of the dashboard page.
pub(super) fn dashboard_view(
    summary: &PeriodSummary,
    charts: &[DashboardChart],
    language: Language,
) -> Markup {
    let texts = language.texts();

    html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            (NavBar::new(endpoints::DASHBOARD_VIEW, language).period(summary.period).into_html())

            h1 class="text-4xl md:text-5xl font-extrabold mb-3 tracking-tight" { (texts.title) }

            p class={ "text-xl mb-10 " (MUTED_TEXT_STYLE) } { (texts.welcome) }

            (stat_cards(summary, language))

            (charts_view(charts))

            div class="grid grid-cols-1 lg:grid-cols-2 gap-8"
            {
                (recent_transactions_view(&summary.recent_transactions, language))
                (budgets_view(&summary.budgets, language))
            }
        }
    )
}

fn stat_cards(summary: &PeriodSummary, language: Language) -> Markup {
    let texts = language.texts();
    let balance_style = if summary.total_balance > 0.0 {
        "text-green-500"
    } else {
        "text-red-500"
    };

    html!(
        section class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10"
        {
            div class=(CARD_STYLE)
            {
                h3 class={ "text-xl font-semibold mb-2 " (balance_style) } { (texts.total_balance) }
                p id="total-balance" class="text-4xl font-bold" { (format_currency(summary.total_balance)) }
            }

            div class=(CARD_STYLE)
            {
                h3 class="text-xl font-semibold mb-2" { (texts.monthly_income) }
                p id="monthly-income" class="text-4xl font-bold text-green-500" { (format_currency(summary.income)) }
            }

            div class=(CARD_STYLE)
            {
                h3 class="text-xl font-semibold mb-2" { (texts.monthly_expenses) }
                p id="monthly-expenses" class="text-4xl font-bold text-red-500" { (format_currency(summary.expenses)) }
            }
        }
    )
}

pub(crate) fn recent_transactions_view(transactions: &[Transaction], language: Language) -> Markup {
    let texts = language.texts();

    html!(
        section id="recent-transactions" class=(CARD_STYLE)
        {
            h2 class=(SECTION_HEADER_STYLE) { (texts.recent_transactions) }

            @if transactions.is_empty() {
                p class={ "text-center py-8 " (MUTED_TEXT_STYLE) } { (texts.no_transactions) }
            } @else {
                ul class="space-y-4"
                {
                    @for transaction in transactions {
                        @let amount_style = if transaction.amount > 0.0 { "text-green-500" } else { "text-red-500" };

                        li class="flex justify-between items-center py-3 border-b border-gray-200 dark:border-gray-700 last:border-b-0"
                        {
                            span class={ "text-xl font-semibold " (amount_style) }
                            {
                                (format_signed_currency(transaction.amount))
                            }
                            span { (category_label(&transaction.category, language)) }
                            span class=(MUTED_TEXT_STYLE)
                            {
                                (transaction.date.day) "." (transaction.date.month) "." (transaction.date.year)
                            }
                        }
                    }
                }
            }
        }
    )
}

fn progress_style(level: UtilizationLevel) -> &'static str {
    match level {
        UtilizationLevel::Healthy => "bg-green-500",
        UtilizationLevel::Elevated => "bg-yellow-500",
        UtilizationLevel::High => "bg-orange-500",
        UtilizationLevel::Exceeded => "bg-red-600",
    }
}

pub(crate) fn budgets_view(budgets: &[BudgetUtilization], language: Language) -> Markup {
    let texts = language.texts();

    html!(
        section id="budgets" class=(CARD_STYLE)
        {
            h2 class=(SECTION_HEADER_STYLE) { (texts.monthly_budgets) }

            @if budgets.is_empty() {
                p class={ "text-center py-12 " (MUTED_TEXT_STYLE) } { (texts.no_budgets) }
            } @else {
                div class="space-y-6"
                {
                    @for utilization in budgets {
                        div class="budget space-y-2"
                        {
                            div class="flex justify-between items-center"
                            {
                                span class="text-lg font-medium"
                                {
                                    (category_label(&utilization.budget.category, language))
                                }
                                span class={ "text-sm " (MUTED_TEXT_STYLE) }
                                {
                                    (format_amount(utilization.spent))
                                    " / "
                                    (format_currency(utilization.budget.amount))
                                }
                            }

                            div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3"
                            {
                                div
                                    class={ "h-3 rounded-full " (progress_style(utilization.level)) }
                                    style={ "width: " (format!("{:.0}", utilization.display_percentage)) "%" }
                                {}
                            }

                            div class={ "flex justify-between text-xs " (MUTED_TEXT_STYLE) }
                            {
                                span { (format!("{:.0}", utilization.display_percentage)) "%" }

                                @if utilization.over_budget {
                                    span class="over-budget text-red-500" { (texts.over_budget) }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        budget::Budget,
        period::{Period, RecordDate},
        record_id::RecordId,
        summary::{Language, aggregation::PeriodSummary},
        transaction::Transaction,
    };

    use super::dashboard_view;

    fn summary() -> PeriodSummary {
        let transactions = vec![
            Transaction {
                id: RecordId::new(),
                amount: 5000.0,
                category: "job".to_owned(),
                notes: None,
                date: RecordDate::new(1, 1, 2026).unwrap(),
            },
            Transaction {
                id: RecordId::new(),
                amount: -1200.0,
                category: "food".to_owned(),
                notes: None,
                date: RecordDate::new(5, 1, 2026).unwrap(),
            },
        ];
        let budgets = vec![
            Budget {
                id: RecordId::new(),
                category: "food".to_owned(),
                amount: 1000.0,
                month: 1,
                year: 2026,
                notes: None,
            },
            Budget {
                id: RecordId::new(),
                category: "housing".to_owned(),
                amount: 15000.0,
                month: 1,
                year: 2026,
                notes: None,
            },
        ];

        PeriodSummary::build(&transactions, &budgets, Period::new(1, 2026).unwrap())
    }

    fn select_text(document: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();

        document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[test]
    fn shows_stat_cards() {
        let document = Html::parse_fragment(&dashboard_view(&summary(), &[], Language::En).into_string());

        assert_eq!(select_text(&document, "#total-balance"), vec!["3 800 Kč"]);
        assert_eq!(select_text(&document, "#monthly-income"), vec!["5 000 Kč"]);
        assert_eq!(select_text(&document, "#monthly-expenses"), vec!["1 200 Kč"]);
    }

    #[test]
    fn lists_recent_transactions_newest_first() {
        let document = Html::parse_fragment(&dashboard_view(&summary(), &[], Language::Cz).into_string());

        let rows = select_text(&document, "#recent-transactions li");

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("-1 200 Kč"), "got {}", rows[0]);
        assert!(rows[0].contains("Jídlo"), "got {}", rows[0]);
        assert!(rows[1].contains("+5 000 Kč"), "got {}", rows[1]);
        assert!(rows[1].contains("Práce"), "got {}", rows[1]);
    }

    #[test]
    fn marks_only_exceeded_budgets() {
        let document = Html::parse_fragment(&dashboard_view(&summary(), &[], Language::Cz).into_string());

        assert_eq!(select_text(&document, "#budgets .budget").len(), 2);
        assert_eq!(select_text(&document, "#budgets .over-budget"), vec!["Překročeno"]);
    }

    #[test]
    fn shows_empty_states() {
        let empty = PeriodSummary::build(&[], &[], Period::new(1, 2026).unwrap());

        let document = Html::parse_fragment(&dashboard_view(&empty, &[], Language::En).into_string());

        assert_eq!(
            select_text(&document, "#recent-transactions p"),
            vec!["No transactions yet..."]
        );
        assert_eq!(
            select_text(&document, "#budgets p"),
            vec!["No budgets for this month yet..."]
        );
    }

    #[test]
    fn language_switch_keeps_the_month() {
        let summary = PeriodSummary::build(&[], &[], Period::new(1, 2020).unwrap());

        let document = Html::parse_fragment(&dashboard_view(&summary, &[], Language::Cz).into_string());

        let selector = Selector::parse("#language-switch a").unwrap();
        let hrefs: Vec<_> = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/dashboard?month=1&year=2020&lang=en"]);
    }

    #[test]
    fn budget_shows_spent_of_limit() {
        let document = Html::parse_fragment(&dashboard_view(&summary(), &[], Language::En).into_string());

        let rows = select_text(&document, "#budgets .budget");

        assert!(rows[0].contains("1 200 / 1 000 Kč"), "got {}", rows[0]);
    }
}
