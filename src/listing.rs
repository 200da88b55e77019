//! Paging and search parameters for ledger listings.
//!
//! The table control counts pages from zero while the server counts from one; the
//! conversion happens only in [`ListQuery::to_query_string`].

use serde::Serialize;

use crate::config::DEFAULT_ROWS_PER_PAGE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index as shown by the table control.
    pub page: u32,
    pub limit: u32,
    pub q: String,
}

#[derive(Serialize)]
struct WireQuery<'a> {
    page: u32,
    limit: u32,
    q: &'a str,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_ROWS_PER_PAGE,
            q: String::new(),
        }
    }
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        let wire = WireQuery {
            page: self.page + 1,
            limit: self.limit,
            q: &self.q,
        };
        // Three scalar fields always serialize.
        serde_urlencoded::to_string(&wire).unwrap_or_default()
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Changing the page size goes back to the first page.
    pub fn with_limit(&self, limit: u32) -> Self {
        Self {
            page: 0,
            limit: limit.max(1),
            ..self.clone()
        }
    }

    /// A new search starts from the first page.
    pub fn with_search(&self, q: &str) -> Self {
        Self {
            page: 0,
            q: q.trim().to_string(),
            ..self.clone()
        }
    }

    pub fn page_count(&self, total: u64) -> u32 {
        let limit = u64::from(self.limit.max(1));
        u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// Label such as `11–20 of 42`.
    pub fn range_label(&self, total: u64) -> String {
        if total == 0 {
            return "0–0 of 0".to_string();
        }
        let first = u64::from(self.page) * u64::from(self.limit) + 1;
        let last = (first + u64::from(self.limit) - 1).min(total);
        format!("{}–{} of {}", first.min(total), last, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_page_is_sent_one_based() {
        for (page, limit) in [(0, 10), (1, 10), (4, 25), (9, 5)] {
            let query = ListQuery {
                page,
                limit,
                q: String::new(),
            };
            assert_eq!(
                query.to_query_string(),
                format!("page={}&limit={}&q=", page + 1, limit)
            );
        }
    }

    #[test]
    fn search_terms_are_encoded() {
        let query = ListQuery::default().with_search(" rent & bills ");
        assert_eq!(query.to_query_string(), "page=1&limit=10&q=rent+%26+bills");
    }

    #[test]
    fn changing_limit_or_search_resets_page() {
        let query = ListQuery::default().with_page(3);
        assert_eq!(query.with_limit(25).page, 0);
        assert_eq!(query.with_search("x").page, 0);
        assert_eq!(query.with_page(2).limit, DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn navigation_bounds() {
        let query = ListQuery::default();
        assert_eq!(query.page_count(0), 0);
        assert_eq!(query.page_count(21), 3);
        assert!(!query.has_prev());
        assert!(query.has_next(21));
        assert!(!query.with_page(2).has_next(21));
        assert!(query.with_page(2).has_prev());
    }

    #[test]
    fn range_label_clamps_to_total() {
        let query = ListQuery::default().with_page(2);
        assert_eq!(query.range_label(21), "21–21 of 21");
        assert_eq!(ListQuery::default().range_label(0), "0–0 of 0");
        assert_eq!(ListQuery::default().range_label(42), "1–10 of 42");
    }

    #[test]
    fn page_count_saturates_for_huge_totals() {
        let query = ListQuery::default().with_limit(1);
        assert_eq!(query.page_count(u64::MAX), u32::MAX);
        assert_eq!(query.page_count(u64::from(u32::MAX) + 7), u32::MAX);
        assert_eq!(query.page_count(u64::from(u32::MAX)), u32::MAX);
    }
}
