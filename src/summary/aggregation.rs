//! Derives the dashboard views from a snapshot of transactions and budgets.
//!
//! Every function here is pure: it reads the records it is given and returns
//! a new value. Amounts that are not finite numbers contribute nothing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    budget::Budget,
    period::{MONTHS_PER_YEAR, Period},
    summary::category::category_key,
    transaction::Transaction,
};

/// The number of transactions shown in the recent transactions list.
pub const RECENT_TRANSACTION_COUNT: usize = 8;

/// The number of categories shown in the expense share chart.
pub const EXPENSE_SHARE_COUNT: usize = 8;

/// A per-month series covering one calendar year, January first.
pub type YearlySeries = [f64; MONTHS_PER_YEAR];

fn amount(transaction: &Transaction) -> f64 {
    if transaction.amount.is_finite() {
        transaction.amount
    } else {
        0.0
    }
}

/// The sum of all transaction amounts, regardless of date.
pub fn total_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(amount).sum()
}

/// The sum of the positive amounts in `period`.
pub fn period_income(transactions: &[Transaction], period: Period) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.period() == period)
        .map(amount)
        .filter(|amount| *amount > 0.0)
        .sum()
}

/// The sum of the magnitudes of the negative amounts in `period`.
pub fn period_expenses(transactions: &[Transaction], period: Period) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.period() == period)
        .map(amount)
        .filter(|amount| *amount < 0.0)
        .map(f64::abs)
        .sum()
}

/// The expenses of `period` grouped by category key.
///
/// Each value is the sum of the magnitudes of the negative amounts in that
/// category. Categories without expenses are absent.
pub fn expenses_by_category(transactions: &[Transaction], period: Period) -> BTreeMap<String, f64> {
    let mut expenses = BTreeMap::new();

    for transaction in transactions {
        let amount = amount(transaction);

        if transaction.period() != period || amount >= 0.0 {
            continue;
        }

        *expenses
            .entry(category_key(&transaction.category))
            .or_insert(0.0) += amount.abs();
    }

    expenses
}

/// How close a budget is to its limit, used to colour progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationLevel {
    /// Less than 60% used.
    Healthy,
    /// At least 60% used.
    Elevated,
    /// At least 85% used.
    High,
    /// The whole budget is used.
    Exceeded,
}

impl UtilizationLevel {
    fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exceeded
        } else if percentage >= 85.0 {
            Self::High
        } else if percentage >= 60.0 {
            Self::Elevated
        } else {
            Self::Healthy
        }
    }
}

/// The spending against one budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUtilization {
    /// The budget being measured.
    pub budget: Budget,
    /// The expenses in the budget's category and period.
    pub spent: f64,
    /// `spent` as a percentage of the budget amount, may exceed 100.
    pub percentage: f64,
    /// `percentage` capped at 100, for drawing progress bars.
    pub display_percentage: f64,
    /// Whether more than the budget amount has been spent.
    pub over_budget: bool,
    /// The band `display_percentage` falls in.
    pub level: UtilizationLevel,
}

/// Measure each budget of `period` against the expenses of that period.
///
/// Budgets keep their input order. Duplicate budgets for a category are each
/// measured against the full spending in that category.
pub fn budget_utilization(
    budgets: &[Budget],
    transactions: &[Transaction],
    period: Period,
) -> Vec<BudgetUtilization> {
    let expenses = expenses_by_category(transactions, period);

    budgets
        .iter()
        .filter(|budget| budget.period() == period)
        .map(|budget| {
            let spent = expenses
                .get(&category_key(&budget.category))
                .copied()
                .unwrap_or(0.0);

            let percentage = if budget.amount > 0.0 {
                spent / budget.amount * 100.0
            } else {
                0.0
            };
            let display_percentage = percentage.min(100.0);

            BudgetUtilization {
                budget: budget.clone(),
                spent,
                percentage,
                display_percentage,
                over_budget: percentage > 100.0,
                level: UtilizationLevel::from_percentage(display_percentage),
            }
        })
        .collect()
}

/// One slice of the expense share chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    /// The category key.
    pub category: String,
    /// The expenses in the category.
    pub amount: f64,
}

/// The largest categories of `expenses`, largest first.
///
/// At most [EXPENSE_SHARE_COUNT] categories are returned. Equal amounts are
/// ordered by category key.
pub fn expense_shares(expenses: &BTreeMap<String, f64>) -> Vec<ExpenseShare> {
    let mut shares: Vec<_> = expenses
        .iter()
        .map(|(category, amount)| ExpenseShare {
            category: category.clone(),
            amount: *amount,
        })
        .collect();

    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares.truncate(EXPENSE_SHARE_COUNT);

    shares
}

/// The transactions ordered newest first.
///
/// Transactions on the same date keep their input order.
pub fn sort_by_date_descending(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<_> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
}

/// The `count` newest transactions, newest first.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut sorted = sort_by_date_descending(transactions);
    sorted.truncate(count);

    sorted
}

/// The income of each month of `year`.
pub fn monthly_income_series(transactions: &[Transaction], year: i32) -> YearlySeries {
    monthly_series(transactions, year, |amount| (amount > 0.0).then_some(amount))
}

/// The expenses of each month of `year`, as positive numbers.
pub fn monthly_expense_series(transactions: &[Transaction], year: i32) -> YearlySeries {
    monthly_series(transactions, year, |amount| {
        (amount < 0.0).then_some(amount.abs())
    })
}

fn monthly_series(
    transactions: &[Transaction],
    year: i32,
    select: impl Fn(f64) -> Option<f64>,
) -> YearlySeries {
    let mut series = [0.0; MONTHS_PER_YEAR];

    for transaction in transactions {
        if transaction.date.year != year {
            continue;
        }

        if let (Some(value), Some(slot)) = (
            select(amount(transaction)),
            series.get_mut(transaction.period().month_index()),
        ) {
            *slot += value;
        }
    }

    series
}

/// The balance at the end of each month of `year`.
///
/// Transactions are accumulated oldest first, so January starts from the
/// balance of everything before `year`. A month without transactions keeps
/// the balance of the month before it.
pub fn running_balance_series(transactions: &[Transaction], year: i32) -> YearlySeries {
    let mut sorted: Vec<_> = transactions.iter().collect();
    sorted.sort_by_key(|transaction| transaction.date);

    let mut sorted = sorted.into_iter().peekable();
    let mut running_total = 0.0;
    let mut series = [0.0; MONTHS_PER_YEAR];

    for (index, slot) in series.iter_mut().enumerate() {
        let end_of_month = Period {
            year,
            month: (index + 1) as u8,
        };

        while let Some(transaction) = sorted.next_if(|t| t.period() <= end_of_month) {
            running_total += amount(transaction);
        }

        *slot = running_total;
    }

    series
}

/// The aggregate views of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// The month summarised.
    pub period: Period,
    /// The balance over all transactions, regardless of date.
    pub total_balance: f64,
    /// See [period_income].
    pub income: f64,
    /// See [period_expenses].
    pub expenses: f64,
    /// See [expenses_by_category].
    pub expenses_by_category: BTreeMap<String, f64>,
    /// See [expense_shares].
    pub expense_shares: Vec<ExpenseShare>,
    /// See [budget_utilization].
    pub budgets: Vec<BudgetUtilization>,
    /// The newest transactions, see [recent_transactions].
    pub recent_transactions: Vec<Transaction>,
}

impl PeriodSummary {
    /// Compute every view of `period`.
    pub fn build(transactions: &[Transaction], budgets: &[Budget], period: Period) -> Self {
        let expenses_by_category = expenses_by_category(transactions, period);

        Self {
            period,
            total_balance: total_balance(transactions),
            income: period_income(transactions, period),
            expenses: period_expenses(transactions, period),
            expense_shares: expense_shares(&expenses_by_category),
            expenses_by_category,
            budgets: budget_utilization(budgets, transactions, period),
            recent_transactions: recent_transactions(transactions, RECENT_TRANSACTION_COUNT)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// The per-month series of one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySummary {
    /// The year summarised.
    pub year: i32,
    /// See [monthly_income_series].
    pub income: YearlySeries,
    /// See [monthly_expense_series].
    pub expenses: YearlySeries,
    /// See [running_balance_series].
    pub balance: YearlySeries,
}

impl YearlySummary {
    /// Compute every series of `year`.
    pub fn build(transactions: &[Transaction], year: i32) -> Self {
        Self {
            year,
            income: monthly_income_series(transactions, year),
            expenses: monthly_expense_series(transactions, year),
            balance: running_balance_series(transactions, year),
        }
    }
}
