//! Reshapes monthly report rows into chart series for the dashboard.

use std::future::Future;

use futures::future::try_join_all;

use crate::config::TREND_MONTHS;
use crate::error::ApiError;
use crate::models::MonthlyReport;
use crate::month::Month;

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub income: f64,
    pub spend: f64,
    pub savings: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub total: f64,
    /// Share of the month's categorized spend, 0 to 100.
    pub percent: f64,
}

/// Fetches the reports for the months preceding `current` and returns them as a
/// chronological series. All fetches run concurrently; if any one fails the whole
/// series fails.
pub async fn fetch_trend<F, Fut>(current: Month, fetch: F) -> Result<Vec<TrendPoint>, ApiError>
where
    F: Fn(Month) -> Fut,
    Fut: Future<Output = Result<MonthlyReport, ApiError>>,
{
    let months = current.preceding(TREND_MONTHS);
    let reports = try_join_all(months.iter().map(|m| fetch(*m))).await?;
    Ok(build_trend(&months, &reports))
}

/// Pairs reports with the months they were requested for, by position.
pub fn build_trend(months: &[Month], reports: &[MonthlyReport]) -> Vec<TrendPoint> {
    months
        .iter()
        .zip(reports)
        .map(|(month, report)| TrendPoint {
            label: month.to_string(),
            income: report.income,
            spend: report.expense,
            savings: report.savings,
        })
        .collect()
}

pub fn category_slices(report: &MonthlyReport) -> Vec<CategorySlice> {
    let sum: f64 = report.top_categories.iter().map(|c| c.total).sum();
    report
        .top_categories
        .iter()
        .map(|c| CategorySlice {
            category: c.category.clone(),
            total: c.total,
            percent: if sum > 0.0 { c.total / sum * 100.0 } else { 0.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryTotal;
    use futures::executor::block_on;
    use futures::future::{ready, Ready};
    use std::cell::RefCell;

    fn report(month: Month) -> MonthlyReport {
        let n = month.to_string().replace('-', "").parse::<f64>().unwrap();
        MonthlyReport {
            month: month.to_string(),
            income: n,
            expense: n / 2.0,
            savings: n / 2.0,
            ..MonthlyReport::default()
        }
    }

    #[test]
    fn trend_covers_the_four_preceding_months_in_order() {
        let requested = RefCell::new(Vec::new());
        let current = Month::new(2024, 2).unwrap();
        let trend = block_on(fetch_trend(current, |m| -> Ready<Result<MonthlyReport, ApiError>> {
            requested.borrow_mut().push(m);
            ready(Ok(report(m)))
        }))
        .unwrap();

        let labels: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-10", "2023-11", "2023-12", "2024-01"]);
        assert_eq!(trend.len(), 4);
        assert!(!requested.borrow().contains(&current));
        assert_eq!(trend[3].income, 202401.0);
        assert_eq!(trend[3].spend, 202401.0 / 2.0);
    }

    #[test]
    fn one_failed_month_fails_the_series() {
        let current = Month::new(2024, 6).unwrap();
        let bad = Month::new(2024, 4).unwrap();
        let result = block_on(fetch_trend(current, |m| {
            ready(if m == bad {
                Err(ApiError::Status { status: 500 })
            } else {
                Ok(report(m))
            })
        }));
        assert_eq!(result, Err(ApiError::Status { status: 500 }));
    }

    #[test]
    fn labels_follow_request_position_not_payload() {
        let months = Month::new(2024, 1).unwrap().preceding(2);
        let reports = vec![
            MonthlyReport {
                month: "bogus".to_string(),
                ..MonthlyReport::default()
            },
            MonthlyReport::default(),
        ];
        let trend = build_trend(&months, &reports);
        assert_eq!(trend[0].label, "2023-11");
        assert_eq!(trend[1].label, "2023-12");
    }

    #[test]
    fn slices_are_shares_of_the_total() {
        let report = MonthlyReport {
            top_categories: vec![
                CategoryTotal {
                    category: "rent".to_string(),
                    total: 300.0,
                },
                CategoryTotal {
                    category: "food".to_string(),
                    total: 100.0,
                },
            ],
            ..MonthlyReport::default()
        };
        let slices = category_slices(&report);
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[1].percent, 25.0);
        assert!(category_slices(&MonthlyReport::default()).is_empty());
    }
}
