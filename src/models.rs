//! Wire types exchanged with the finance API.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// A recorded income or expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub receipt_url: Option<String>,
}

/// One page of a searchable ledger listing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EntryPage {
    #[serde(default)]
    pub items: Vec<LedgerEntry>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewIncome {
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: String,
}

/// The part of the `/expenses` create response the views care about.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedExpense {
    #[serde(default)]
    pub budget_exceeded: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BudgetStatus {
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub remaining: f64,
    #[serde(default)]
    pub exceeded: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub month: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(alias = "_id")]
    pub category: String,
    pub total: f64,
}

/// Server-computed aggregation for one calendar month.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub top_categories: Vec<CategoryTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_entry_accepts_mongo_style_ids() {
        let raw = r#"{"_id":"abc","category":"food","amount":12.5,"date":"2024-03-02T00:00:00Z","receiptUrl":"/uploads/r.png"}"#;
        let entry: LedgerEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.description, "");
        assert_eq!(entry.receipt_url.as_deref(), Some("/uploads/r.png"));
    }

    #[test]
    fn report_reads_top_categories_keyed_by_id() {
        let raw = r#"{"month":"2024-03","income":1000,"expense":400,"savings":600,
            "topCategories":[{"_id":"rent","total":300},{"category":"food","total":100}]}"#;
        let report: MonthlyReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.budget, None);
        assert_eq!(report.top_categories[0].category, "rent");
        assert_eq!(report.top_categories[1].category, "food");
    }

    #[test]
    fn created_expense_defaults_to_within_budget() {
        let created: CreatedExpense = serde_json::from_str(r#"{"_id":"1"}"#).unwrap();
        assert!(!created.budget_exceeded);
        let created: CreatedExpense = serde_json::from_str(r#"{"budgetExceeded":true}"#).unwrap();
        assert!(created.budget_exceeded);
    }
}
