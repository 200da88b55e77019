//! Build-time and browser-side configuration.

/// Base URL of the finance API. Override at build time with `FINANCE_API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("FINANCE_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// `sessionStorage` key holding the serialized session (tab lifetime).
pub const SESSION_STORAGE_KEY: &str = "finance_session";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "finance_theme";

pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;
pub const ROWS_PER_PAGE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

/// How long the budget warning stays on screen before hiding itself.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

/// Number of months preceding the current one shown in dashboard trends.
pub const TREND_MONTHS: usize = 4;

pub const INCOME_CATEGORIES: [&str; 5] = ["salary", "business", "freelance", "investment", "other"];

pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "food",
    "bills",
    "transport",
    "entertainment",
    "rent",
    "health",
    "shopping",
    "education",
    "other",
];

/// Joins `path` onto the API base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        let url = api_url("/reports/csv");
        assert!(url.ends_with("/reports/csv"));
        assert!(!url.contains("//reports"));
    }
}
