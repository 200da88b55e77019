use chrono::{DateTime, NaiveDate};

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `1234.5` → `1,234.50`, `-20` → `-20.00`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, format_with_commas(cents / 100), cents % 100)
}

/// Renders a server timestamp or date as `YYYY-MM-DD`.
pub fn display_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Some(date) = raw
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
    {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_get_grouping_and_cents() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(-20.0), "-20.00");
        assert_eq!(format_amount(0.004), "0.00");
    }

    #[test]
    fn dates_are_trimmed_to_the_day() {
        assert_eq!(display_date("2024-03-02T10:15:00Z"), "2024-03-02");
        assert_eq!(display_date("2024-03-02T10:15:00.123"), "2024-03-02");
        assert_eq!(display_date("2024-03-02"), "2024-03-02");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
