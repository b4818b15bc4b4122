//! Defines the budget model and the validation of client input.

use serde::{Deserialize, Serialize};

use crate::{Error, period::Period, record_id::RecordId, transaction::clean_notes};

/// A spending limit for one category in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget.
    pub id: RecordId,
    /// The category the limit applies to, matched against transaction
    /// categories without regard to case.
    pub category: String,
    /// The spending limit. Always positive.
    pub amount: f64,
    /// The month of the year, 1 to 12.
    pub month: u8,
    /// The year.
    pub year: i32,
    /// Optional free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Budget {
    /// The calendar month the budget applies to.
    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }
}

/// A validated budget that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    /// See [Budget::category].
    pub category: String,
    /// See [Budget::amount].
    pub amount: f64,
    /// The month the budget applies to.
    pub period: Period,
    /// See [Budget::notes].
    pub notes: Option<String>,
}

/// The JSON body for creating or updating a budget.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BudgetForm {
    /// The category label.
    pub category: Option<String>,
    /// The spending limit. The sign is ignored.
    pub amount: Option<f64>,
    /// Optional free text. An empty string clears existing notes.
    pub notes: Option<String>,
    /// The month of the year, defaults to the current month.
    pub month: Option<u8>,
    /// The year, defaults to the current year.
    pub year: Option<i32>,
}

impl BudgetForm {
    /// Check the form describes a complete budget.
    ///
    /// A missing month or year is taken from `current`.
    ///
    /// # Errors
    /// Returns [Error::MissingField] if the category or amount is missing,
    /// [Error::InvalidAmount] if the amount is zero or not finite and
    /// [Error::InvalidMonth] if the month is out of range.
    pub fn validate(self, current: Period) -> Result<NewBudget, Error> {
        let category = self
            .category
            .map(|category| category.trim().to_owned())
            .filter(|category| !category.is_empty())
            .ok_or(Error::MissingField("category"))?;

        let amount = self.amount.ok_or(Error::MissingField("amount"))?;

        if !amount.is_finite() || amount == 0.0 {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        let period = Period::new(
            self.month.unwrap_or(current.month),
            self.year.unwrap_or(current.year),
        )?;

        Ok(NewBudget {
            category,
            amount: amount.abs(),
            period,
            notes: clean_notes(self.notes),
        })
    }

    /// Replace the fields of `existing` with the fields given in this form and
    /// validate the result.
    pub fn apply_to(self, existing: &Budget) -> Result<NewBudget, Error> {
        BudgetForm {
            category: self.category.or_else(|| Some(existing.category.clone())),
            amount: self.amount.or(Some(existing.amount)),
            notes: self.notes.or_else(|| existing.notes.clone()),
            ..self
        }
        .validate(existing.period())
    }
}

#[cfg(test)]
mod validate_tests {
    use crate::{Error, period::Period};

    use super::BudgetForm;

    fn current() -> Period {
        Period::new(4, 2026).unwrap()
    }

    fn form() -> BudgetForm {
        BudgetForm {
            category: Some("food".to_owned()),
            amount: Some(8000.0),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_current_period() {
        let budget = form().validate(current()).unwrap();

        assert_eq!(budget.period, current());
        assert_eq!(budget.amount, 8000.0);
        assert_eq!(budget.category, "food");
    }

    #[test]
    fn explicit_period_overrides_current() {
        let budget = BudgetForm {
            month: Some(12),
            year: Some(2025),
            ..form()
        }
        .validate(current())
        .unwrap();

        assert_eq!(budget.period, Period::new(12, 2025).unwrap());
    }

    #[test]
    fn stores_absolute_amount() {
        let budget = BudgetForm {
            amount: Some(-500.0),
            ..form()
        }
        .validate(current())
        .unwrap();

        assert_eq!(budget.amount, 500.0);
    }

    #[test]
    fn rejects_zero_amount() {
        let result = BudgetForm {
            amount: Some(0.0),
            ..form()
        }
        .validate(current());

        assert_eq!(result, Err(Error::InvalidAmount("0".to_owned())));
    }

    #[test]
    fn rejects_missing_amount() {
        let result = BudgetForm {
            amount: None,
            ..form()
        }
        .validate(current());

        assert_eq!(result, Err(Error::MissingField("amount")));
    }

    #[test]
    fn rejects_blank_category() {
        let result = BudgetForm {
            category: Some(" ".to_owned()),
            ..form()
        }
        .validate(current());

        assert_eq!(result, Err(Error::MissingField("category")));
    }

    #[test]
    fn rejects_invalid_month() {
        let result = BudgetForm {
            month: Some(0),
            ..form()
        }
        .validate(current());

        assert_eq!(result, Err(Error::InvalidMonth(0)));
    }
}

#[cfg(test)]
mod apply_to_tests {
    use crate::{period::Period, record_id::RecordId};

    use super::{Budget, BudgetForm};

    fn existing() -> Budget {
        Budget {
            id: RecordId::new(),
            category: "Housing".to_owned(),
            amount: 15000.0,
            month: 2,
            year: 2026,
            notes: None,
        }
    }

    #[test]
    fn empty_form_keeps_everything() {
        let existing = existing();

        let result = BudgetForm::default().apply_to(&existing).unwrap();

        assert_eq!(result.category, existing.category);
        assert_eq!(result.amount, existing.amount);
        assert_eq!(result.period, existing.period());
        assert_eq!(result.notes, None);
    }

    #[test]
    fn replaces_only_given_fields() {
        let result = BudgetForm {
            amount: Some(-16000.0),
            month: Some(3),
            ..Default::default()
        }
        .apply_to(&existing())
        .unwrap();

        assert_eq!(result.amount, 16000.0);
        assert_eq!(result.period, Period::new(3, 2026).unwrap());
        assert_eq!(result.category, "Housing");
    }
}
