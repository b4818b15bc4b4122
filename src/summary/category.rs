//! Canonical category keys and their localized display names.

use crate::summary::Language;

/// The key that transactions without a category are stored under.
pub const UNCATEGORIZED: &str = "other";

/// The categories offered when recording income.
pub const INCOME_CATEGORIES: [&str; 4] = ["job", "investment", "gift", UNCATEGORIZED];

/// The categories offered when recording an expense or setting a budget.
pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "food",
    "housing",
    "transportation",
    "entertainment",
    "health",
    UNCATEGORIZED,
];

/// The canonical form of a category, used to group and match records.
///
/// Categories are compared without regard to case or surrounding whitespace.
/// A blank category is [UNCATEGORIZED].
pub fn category_key(category: &str) -> String {
    let key = category.trim().to_lowercase();

    if key.is_empty() {
        UNCATEGORIZED.to_owned()
    } else {
        key
    }
}

/// The name to show for `category` in `language`.
///
/// Well-known categories are translated, anything else is shown as its key
/// with the first letter in upper case.
pub fn category_label(category: &str, language: Language) -> String {
    let key = category_key(category);

    let known = match (key.as_str(), language) {
        ("food", Language::Cz) => Some("Jídlo"),
        ("housing", Language::Cz) => Some("Bydlení"),
        ("transportation", Language::Cz) => Some("Doprava"),
        ("entertainment", Language::Cz) => Some("Zábava"),
        ("health", Language::Cz) => Some("Zdraví"),
        ("other", Language::Cz) => Some("Ostatní"),
        ("job", Language::Cz) => Some("Práce"),
        ("investment", Language::Cz) => Some("Investice"),
        ("gift", Language::Cz) => Some("Dar"),
        ("food", Language::En) => Some("Food"),
        ("housing", Language::En) => Some("Housing"),
        ("transportation", Language::En) => Some("Transportation"),
        ("entertainment", Language::En) => Some("Entertainment"),
        ("health", Language::En) => Some("Health"),
        ("other", Language::En) => Some("Other"),
        ("job", Language::En) => Some("Job"),
        ("investment", Language::En) => Some("Investment"),
        ("gift", Language::En) => Some("Gift"),
        _ => None,
    };

    match known {
        Some(label) => label.to_owned(),
        None => capitalize(&key),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
