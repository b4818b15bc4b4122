//! The display languages of the dashboard and their fixed texts.

use serde::{Deserialize, Serialize};

use crate::period::MONTHS_PER_YEAR;

/// A language the dashboard can be shown in.
///
/// Parsed from the `lang` query parameter, which accepts `cz` or `en` in
/// either case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Czech.
    #[default]
    #[serde(alias = "CZ", alias = "cs")]
    Cz,
    /// English.
    #[serde(alias = "EN")]
    En,
}

/// The query parameters of pages that only need a language.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguageQuery {
    #[serde(default)]
    pub lang: Language,
}

/// The fixed texts of the dashboard in one language.
#[derive(Debug)]
pub(crate) struct Texts {
    pub title: &'static str,
    pub welcome: &'static str,
    pub total_balance: &'static str,
    pub monthly_income: &'static str,
    pub monthly_expenses: &'static str,
    pub recent_transactions: &'static str,
    pub monthly_budgets: &'static str,
    pub no_transactions: &'static str,
    pub no_budgets: &'static str,
    pub over_budget: &'static str,
    pub balance: &'static str,
    pub balance_over_time: &'static str,
    pub income: &'static str,
    pub expenses: &'static str,
    pub income_vs_expenses: &'static str,
    pub expense_categories: &'static str,
    pub no_expenses: &'static str,
    pub short_months: [&'static str; MONTHS_PER_YEAR],
    pub transactions_title: &'static str,
    pub transactions_subtitle: &'static str,
    pub add_transaction: &'static str,
    pub transaction_type: &'static str,
    pub income_type: &'static str,
    pub expense_type: &'static str,
    pub budgets_title: &'static str,
    pub budgets_subtitle: &'static str,
    pub budgets_this_month: &'static str,
    pub add_budget: &'static str,
    pub amount_field: &'static str,
    pub category_field: &'static str,
    pub notes_field: &'static str,
    pub date_field: &'static str,
}

const CZ: Texts = Texts {
    title: "Přehled",
    welcome: "Vítejte na vašem finančním přehledu!",
    total_balance: "Celkový zůstatek",
    monthly_income: "Měsíční příjem",
    monthly_expenses: "Měsíční výdaje",
    recent_transactions: "Poslední transakce",
    monthly_budgets: "Měsíční rozpočty",
    no_transactions: "Zatím žádné transakce...",
    no_budgets: "Zatím žádné rozpočty pro tento měsíc...",
    over_budget: "Překročeno",
    balance: "Zůstatek",
    balance_over_time: "Celkový zůstatek v čase",
    income: "Příjmy",
    expenses: "Výdaje",
    income_vs_expenses: "Příjmy vs Výdaje",
    expense_categories: "Kategorie výdajů tento měsíc",
    no_expenses: "Žádné výdaje v tomto měsíci",
    short_months: [
        "led", "úno", "bře", "dub", "kvě", "čvn", "čvc", "srp", "zář", "říj", "lis", "pro",
    ],
    transactions_title: "Transakce",
    transactions_subtitle: "Zde můžete prohlížet a přidávat transakce",
    add_transaction: "Přidat transakci",
    transaction_type: "Typ",
    income_type: "Příjem",
    expense_type: "Výdaj",
    budgets_title: "Rozpočty",
    budgets_subtitle: "Zde můžete prohlížet a nastavovat měsíční rozpočty",
    budgets_this_month: "Rozpočty pro tento měsíc",
    add_budget: "Přidat rozpočet",
    amount_field: "Částka (Kč)",
    category_field: "Kategorie",
    notes_field: "Poznámky",
    date_field: "Datum",
};

const EN: Texts = Texts {
    title: "Dashboard",
    welcome: "Welcome to your financial dashboard!",
    total_balance: "Total Balance",
    monthly_income: "Monthly Income",
    monthly_expenses: "Monthly Expenses",
    recent_transactions: "Recent Transactions",
    monthly_budgets: "Monthly Budgets",
    no_transactions: "No transactions yet...",
    no_budgets: "No budgets for this month yet...",
    over_budget: "Over budget",
    balance: "Balance",
    balance_over_time: "Total balance over time",
    income: "Income",
    expenses: "Expenses",
    income_vs_expenses: "Income vs Expenses",
    expense_categories: "Expense categories this month",
    no_expenses: "No expenses this month",
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    transactions_title: "Transactions",
    transactions_subtitle: "Here you can oversee and add your transactions",
    add_transaction: "Add transaction",
    transaction_type: "Type",
    income_type: "Income",
    expense_type: "Expense",
    budgets_title: "Budgets",
    budgets_subtitle: "Here you can view and set monthly budgets",
    budgets_this_month: "Budgets for this month",
    add_budget: "Add budget",
    amount_field: "Amount (Kč)",
    category_field: "Category",
    notes_field: "Notes",
    date_field: "Date",
};

impl Language {
    pub(crate) fn texts(self) -> &'static Texts {
        match self {
            Language::Cz => &CZ,
            Language::En => &EN,
        }
    }

    /// The value of the `lang` query parameter that selects this language.
    pub(crate) fn query_code(self) -> &'static str {
        match self {
            Language::Cz => "cz",
            Language::En => "en",
        }
    }

    /// The value of the HTML `lang` attribute.
    pub(crate) fn html_code(self) -> &'static str {
        match self {
            Language::Cz => "cs",
            Language::En => "en",
        }
    }
}
