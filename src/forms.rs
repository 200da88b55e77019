//! Draft state of the entry and budget forms.

use crate::models::NewIncome;
use crate::month::today;

/// Fields shared by the income and expense forms.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryDraft {
    pub category: String,
    pub amount: String,
    pub description: String,
    pub date: String,
}

impl EntryDraft {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            amount: String::new(),
            description: String::new(),
            date: today().format("%Y-%m-%d").to_string(),
        }
    }

    pub fn amount(&self) -> Result<f64, &'static str> {
        parse_amount(&self.amount)
    }

    /// Keeps category and date so several entries can be recorded in a row.
    pub fn cleared(&self) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            ..self.clone()
        }
    }

    pub fn to_income(&self, amount: f64) -> NewIncome {
        NewIncome {
            category: self.category.clone(),
            amount,
            description: self.description.trim().to_string(),
            date: self.date.clone(),
        }
    }
}

/// Expense form: an entry plus an optional receipt attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft<R> {
    pub entry: EntryDraft,
    pub receipt: Option<R>,
}

impl<R: Clone> ExpenseDraft<R> {
    pub fn new(category: &str) -> Self {
        Self {
            entry: EntryDraft::new(category),
            receipt: None,
        }
    }

    /// Form state after the server accepted the expense. The fields are cleared whether
    /// or not the budget was exceeded; the returned flag says whether to warn.
    pub fn after_submit(&self, budget_exceeded: bool) -> (Self, bool) {
        let next = Self {
            entry: self.entry.cleared(),
            receipt: None,
        };
        (next, budget_exceeded)
    }
}

pub fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err("Enter a positive amount."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ExpenseDraft<String> {
        ExpenseDraft {
            entry: EntryDraft {
                category: "rent".to_string(),
                amount: "950".to_string(),
                description: "March rent".to_string(),
                date: "2024-03-01".to_string(),
            },
            receipt: Some("lease.pdf".to_string()),
        }
    }

    #[test]
    fn exceeded_budget_warns_and_clears_fields() {
        let (next, warn) = filled().after_submit(true);
        assert!(warn);
        assert_eq!(next.entry.amount, "");
        assert_eq!(next.entry.description, "");
        assert_eq!(next.receipt, None);
        assert_eq!(next.entry.category, "rent");
        assert_eq!(next.entry.date, "2024-03-01");
    }

    #[test]
    fn within_budget_clears_fields_without_warning() {
        let (next, warn) = filled().after_submit(false);
        assert!(!warn);
        assert_eq!(next.entry.amount, "");
        assert_eq!(next.receipt, None);
    }

    #[test]
    fn amounts_must_be_positive_numbers() {
        assert_eq!(parse_amount(" 12.50 "), Ok(12.5));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn income_payload_trims_description() {
        let mut draft = EntryDraft::new("salary");
        draft.description = "  October pay ".to_string();
        let income = draft.to_income(2500.0);
        assert_eq!(income.description, "October pay");
        assert_eq!(income.category, "salary");
        assert_eq!(income.date.len(), 10);
    }
}
