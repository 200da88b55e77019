//! Typed endpoints of the finance API.

use async_trait::async_trait;
use web_sys::{File, FormData};

use crate::config::api_url;
use crate::error::ApiError;
use crate::forms::ExpenseDraft;
use crate::http::HttpClient;
use crate::listing::ListQuery;
use crate::models::{
    AuthResponse, BudgetStatus, CreatedExpense, EntryPage, LoginRequest, MonthlyReport, NewBudget,
    NewIncome, RegisterRequest, User,
};
use crate::month::Month;
use crate::session::AuthApi;

/// Which ledger a listing or form works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerKind {
    Income,
    Expense,
}

impl LedgerKind {
    pub fn path(self) -> &'static str {
        match self {
            LedgerKind::Income => "/income",
            LedgerKind::Expense => "/expenses",
        }
    }
}

pub fn list_path(kind: LedgerKind, query: &ListQuery) -> String {
    format!("{}?{}", kind.path(), query.to_query_string())
}

fn month_path(path: &str, month: Month) -> String {
    let query = serde_urlencoded::to_string([("month", month.to_string())]).unwrap_or_default();
    format!("{}?{}", path, query)
}

pub fn report_path(month: Month) -> String {
    month_path("/reports/monthly", month)
}

pub fn budget_path(month: Month) -> String {
    month_path("/budget/remaining", month)
}

/// Download link for the monthly PDF report.
pub fn report_pdf_url(month: Month) -> String {
    api_url(&month_path("/reports/pdf", month))
}

/// Download link for the full CSV export.
pub fn report_csv_url() -> String {
    api_url("/reports/csv")
}

pub async fn list_entries(
    client: &HttpClient,
    kind: LedgerKind,
    query: &ListQuery,
) -> Result<EntryPage, ApiError> {
    client.get(&list_path(kind, query)).await
}

pub async fn add_income(client: &HttpClient, income: &NewIncome) -> Result<(), ApiError> {
    client.post_json_unit(LedgerKind::Income.path(), income).await
}

pub async fn add_expense(
    client: &HttpClient,
    draft: &ExpenseDraft<File>,
    amount: f64,
) -> Result<CreatedExpense, ApiError> {
    let form = expense_form(draft, amount)
        .map_err(|e| ApiError::Network(format!("could not build upload: {:?}", e)))?;
    client.post_form(LedgerKind::Expense.path(), form).await
}

fn expense_form(draft: &ExpenseDraft<File>, amount: f64) -> Result<FormData, wasm_bindgen::JsValue> {
    let form = FormData::new()?;
    form.append_with_str("category", &draft.entry.category)?;
    form.append_with_str("amount", &amount.to_string())?;
    form.append_with_str("description", &draft.entry.description)?;
    form.append_with_str("date", &draft.entry.date)?;
    if let Some(receipt) = &draft.receipt {
        form.append_with_blob_and_filename("receipt", receipt, &receipt.name())?;
    }
    Ok(form)
}

pub async fn budget_remaining(client: &HttpClient, month: Month) -> Result<BudgetStatus, ApiError> {
    client.get(&budget_path(month)).await
}

pub async fn save_budget(client: &HttpClient, budget: &NewBudget) -> Result<(), ApiError> {
    client.post_json_unit("/budget", budget).await
}

pub async fn monthly_report(client: &HttpClient, month: Month) -> Result<MonthlyReport, ApiError> {
    client.get(&report_path(month)).await
}

#[async_trait(?Send)]
impl AuthApi for HttpClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/login", &LoginRequest { email, password })
            .await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json(
            "/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_paths_carry_one_based_page() {
        let query = ListQuery::default().with_page(2);
        assert_eq!(
            list_path(LedgerKind::Expense, &query),
            "/expenses?page=3&limit=10&q="
        );
        assert_eq!(
            list_path(LedgerKind::Income, &ListQuery::default()),
            "/income?page=1&limit=10&q="
        );
    }

    #[test]
    fn month_scoped_paths() {
        let month = Month::new(2024, 5).unwrap();
        assert_eq!(report_path(month), "/reports/monthly?month=2024-05");
        assert_eq!(budget_path(month), "/budget/remaining?month=2024-05");
        assert!(report_pdf_url(month).ends_with("/reports/pdf?month=2024-05"));
        assert!(report_csv_url().ends_with("/reports/csv"));
    }
}
