//! Chart generation and rendering for the dashboard.
//!
//! This module creates the ECharts visualizations of the dashboard:
//! - **Balance Chart**: Running balance at the end of each month of the year
//! - **Income vs Expenses Chart**: Monthly income and expenses side by side
//! - **Expense Share Chart**: The largest expense categories of the month
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger,
    },
    series::{Line, Pie, bar::Bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    html::HeadElement,
    summary::{
        Language,
        aggregation::{ExpenseShare, YearlySummary},
        category::category_label,
    },
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-8"
        {
            div class="grid grid-cols-1 xl:grid-cols-3 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn balance_chart(summary: &YearlySummary, language: Language) -> Chart {
    let texts = language.texts();

    Chart::new()
        .title(
            Title::new()
                .text(texts.balance_over_time)
                .subtext(summary.year.to_string()),
        )
        .tooltip(currency_tooltip())
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(texts.short_months.to_vec()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name(texts.balance)
                .data(summary.balance.to_vec()),
        )
}

pub(super) fn income_expense_chart(summary: &YearlySummary, language: Language) -> Chart {
    let texts = language.texts();

    Chart::new()
        .title(
            Title::new()
                .text(texts.income_vs_expenses)
                .subtext(summary.year.to_string()),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().right("4%"))
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(texts.short_months.to_vec()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name(texts.income)
                .item_style(ItemStyle::new().color("#22c55e"))
                .data(summary.income.to_vec()),
        )
        .series(
            Bar::new()
                .name(texts.expenses)
                .item_style(ItemStyle::new().color("#ef4444"))
                .data(summary.expenses.to_vec()),
        )
}

pub(super) fn expense_share_chart(shares: &[ExpenseShare], language: Language) -> Chart {
    let texts = language.texts();

    let labels: Vec<String> = shares
        .iter()
        .map(|share| category_label(&share.category, language))
        .collect();
    let data: Vec<(f64, &str)> = shares
        .iter()
        .zip(&labels)
        .map(|(share, label)| (share.amount, label.as_str()))
        .collect();

    let title = if shares.is_empty() {
        Title::new()
            .text(texts.expense_categories)
            .subtext(texts.no_expenses)
    } else {
        Title::new().text(texts.expense_categories)
    };

    Chart::new()
        .title(title)
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name(texts.expenses)
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('cs-CZ', {
              style: 'currency',
              currency: 'CZK',
              maximumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
