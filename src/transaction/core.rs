//! Defines the transaction model and the validation of client input.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    period::{Period, RecordDate},
    record_id::RecordId,
    summary::category::UNCATEGORIZED,
};

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: RecordId,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: f64,
    /// A free-text label used to group transactions, e.g. "food".
    pub category: String,
    /// Optional free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the transaction happened.
    #[serde(flatten)]
    pub date: RecordDate,
}

impl Transaction {
    /// The calendar month the transaction falls in.
    pub fn period(&self) -> Period {
        self.date.period()
    }
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// See [Transaction::amount].
    pub amount: f64,
    /// See [Transaction::category].
    pub category: String,
    /// See [Transaction::notes].
    pub notes: Option<String>,
    /// See [Transaction::date].
    pub date: RecordDate,
}

/// The JSON body for creating or updating a transaction.
///
/// Every field is optional so that the same shape can be used for partial
/// updates. The date may be given either as `day`, `month` and `year` or as a
/// combined `date` string such as `"2026-02-14"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// The signed amount, positive for income and negative for expenses.
    pub amount: Option<f64>,
    /// The category label.
    pub category: Option<String>,
    /// Optional free text. An empty string clears existing notes.
    pub notes: Option<String>,
    /// The day of the month.
    pub day: Option<u8>,
    /// The month of the year.
    pub month: Option<u8>,
    /// The year.
    pub year: Option<i32>,
    /// A combined date, used when the separate components are not all given.
    pub date: Option<String>,
}

impl TransactionForm {
    /// Check the form describes a complete transaction.
    ///
    /// A missing or blank category is stored as [UNCATEGORIZED].
    ///
    /// # Errors
    /// Returns a validation error ([Error::MissingField], [Error::InvalidAmount],
    /// [Error::InvalidMonth], [Error::InvalidDay] or [Error::InvalidDate]) if
    /// the form is incomplete or has out of range values.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;

        if !amount.is_finite() {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        let date = resolve_date(self.day, self.month, self.year, self.date.as_deref())?;

        let category = self
            .category
            .map(|category| category.trim().to_owned())
            .filter(|category| !category.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_owned());

        Ok(NewTransaction {
            amount,
            category,
            notes: clean_notes(self.notes),
            date,
        })
    }

    /// Replace the fields of `existing` with the fields given in this form and
    /// validate the result.
    ///
    /// The date is picked the same way as on creation: a complete set of
    /// components wins, otherwise a combined `date` replaces the whole date.
    /// Without either, any given components replace the matching components
    /// of the existing date.
    pub fn apply_to(self, existing: &Transaction) -> Result<NewTransaction, Error> {
        let has_all_components = self.day.is_some() && self.month.is_some() && self.year.is_some();

        let merged = if self.date.is_some() && !has_all_components {
            TransactionForm {
                day: None,
                month: None,
                year: None,
                ..self
            }
        } else {
            TransactionForm {
                day: self.day.or(Some(existing.date.day)),
                month: self.month.or(Some(existing.date.month)),
                year: self.year.or(Some(existing.date.year)),
                date: None,
                ..self
            }
        };

        TransactionForm {
            amount: merged.amount.or(Some(existing.amount)),
            category: merged.category.or_else(|| Some(existing.category.clone())),
            notes: merged.notes.or_else(|| existing.notes.clone()),
            ..merged
        }
        .validate()
    }
}

/// Pick the canonical date from the separate components or the combined date.
///
/// Complete components take precedence over the combined date.
fn resolve_date(
    day: Option<u8>,
    month: Option<u8>,
    year: Option<i32>,
    combined: Option<&str>,
) -> Result<RecordDate, Error> {
    match (day, month, year, combined) {
        (Some(day), Some(month), Some(year), _) => RecordDate::new(day, month, year),
        (_, _, _, Some(combined)) => RecordDate::parse_combined(combined),
        (None, None, None, None) => Err(Error::MissingField("date")),
        (None, _, _, None) => Err(Error::MissingField("day")),
        (_, None, _, None) => Err(Error::MissingField("month")),
        (_, _, None, None) => Err(Error::MissingField("year")),
    }
}

/// Trim notes and treat blank notes as no notes.
pub(crate) fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|notes| notes.trim().to_owned())
        .filter(|notes| !notes.is_empty())
}

#[cfg(test)]
mod validate_tests {
    use crate::{Error, period::RecordDate, summary::category::UNCATEGORIZED};

    use super::TransactionForm;

    fn form(amount: f64) -> TransactionForm {
        TransactionForm {
            amount: Some(amount),
            category: Some("food".to_owned()),
            day: Some(3),
            month: Some(1),
            year: Some(2026),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_complete_form() {
        let transaction = form(-1200.0).validate().unwrap();

        assert_eq!(transaction.amount, -1200.0);
        assert_eq!(transaction.category, "food");
        assert_eq!(transaction.notes, None);
        assert_eq!(transaction.date, RecordDate::new(3, 1, 2026).unwrap());
    }

    #[test]
    fn keeps_the_sign_of_the_amount() {
        assert_eq!(form(5000.0).validate().unwrap().amount, 5000.0);
        assert_eq!(form(-5000.0).validate().unwrap().amount, -5000.0);
    }

    #[test]
    fn accepts_zero_amount() {
        assert_eq!(form(0.0).validate().unwrap().amount, 0.0);
    }

    #[test]
    fn rejects_missing_amount() {
        let result = TransactionForm {
            amount: None,
            ..form(1.0)
        }
        .validate();

        assert_eq!(result, Err(Error::MissingField("amount")));
    }

    #[test]
    fn rejects_non_finite_amount() {
        let result = form(f64::NAN).validate();

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn missing_category_defaults_to_uncategorized() {
        let result = TransactionForm {
            category: None,
            ..form(-1.0)
        }
        .validate()
        .unwrap();

        assert_eq!(result.category, UNCATEGORIZED);
    }

    #[test]
    fn blank_category_defaults_to_uncategorized() {
        let result = TransactionForm {
            category: Some("   ".to_owned()),
            ..form(-1.0)
        }
        .validate()
        .unwrap();

        assert_eq!(result.category, UNCATEGORIZED);
    }

    #[test]
    fn derives_components_from_combined_date() {
        let result = TransactionForm {
            amount: Some(-10.0),
            date: Some("2026-02-14".to_owned()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(result.date, RecordDate::new(14, 2, 2026).unwrap());
    }

    #[test]
    fn components_win_over_combined_date() {
        let result = TransactionForm {
            date: Some("2020-12-25".to_owned()),
            ..form(-10.0)
        }
        .validate()
        .unwrap();

        assert_eq!(result.date, RecordDate::new(3, 1, 2026).unwrap());
    }

    #[test]
    fn rejects_missing_date() {
        let result = TransactionForm {
            amount: Some(1.0),
            ..Default::default()
        }
        .validate();

        assert_eq!(result, Err(Error::MissingField("date")));
    }

    #[test]
    fn rejects_partial_components_without_combined_date() {
        let result = TransactionForm {
            day: None,
            ..form(1.0)
        }
        .validate();

        assert_eq!(result, Err(Error::MissingField("day")));
    }

    #[test]
    fn rejects_out_of_range_month() {
        let result = TransactionForm {
            month: Some(13),
            ..form(1.0)
        }
        .validate();

        assert_eq!(result, Err(Error::InvalidMonth(13)));
    }

    #[test]
    fn blank_notes_are_dropped() {
        let result = TransactionForm {
            notes: Some("  ".to_owned()),
            ..form(1.0)
        }
        .validate()
        .unwrap();

        assert_eq!(result.notes, None);
    }
}
