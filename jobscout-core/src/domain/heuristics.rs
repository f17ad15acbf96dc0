//! Free-text heuristics
//!
//! Job records carry relative dates ("2 days ago") and salary ranges
//! ("$100,000 - $130,000") as plain strings. Sorting and date filtering
//! derive approximate numbers from them with the rules below. The rules are
//! lossy on purpose and must stay exactly as they are: changing them changes
//! which records a filter keeps and the order a sort produces.

/// Age assigned to any `date_posted` string the heuristic does not recognise
pub const UNKNOWN_RECENCY_DAYS: i64 = 30;

/// Parse the leading integer of a string.
///
/// Leading whitespace and one optional sign are skipped, then digits are
/// read up to the first non-digit. Returns `None` when no digit follows.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Approximate age in days of a relative `date_posted` string.
///
/// - contains "Just now" → 0
/// - contains "day" → leading integer
/// - contains "week" → leading integer × 7
/// - anything else → [`UNKNOWN_RECENCY_DAYS`]
///
/// Only orders correctly within one unit. "a day ago" has no leading integer
/// and yields `None`, as does a week count too large to convert to days.
pub fn recency_days(date_posted: &str) -> Option<i64> {
    if date_posted.contains("Just now") {
        Some(0)
    } else if date_posted.contains("day") {
        leading_int(date_posted)
    } else if date_posted.contains("week") {
        leading_int(date_posted).and_then(|weeks| weeks.checked_mul(7))
    } else {
        Some(UNKNOWN_RECENCY_DAYS)
    }
}

/// Salary sort key: every digit of the string concatenated, divided by 1000.
///
/// "$100,000 - $130,000" becomes 100000130000 / 1000. A string without any
/// digit yields `None`.
pub fn salary_value(salary: &str) -> Option<f64> {
    let digits: String = salary.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().map(|value| value / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("2 days ago"), Some(2));
        assert_eq!(leading_int("  14 days"), Some(14));
        assert_eq!(leading_int("-3 weeks"), Some(-3));
        assert_eq!(leading_int("Just now"), None);
        assert_eq!(leading_int("a day ago"), None);
        assert_eq!(leading_int(""), None);
    }

    #[test]
    fn test_recency_days() {
        assert_eq!(recency_days("Just now"), Some(0));
        assert_eq!(recency_days("1 day ago"), Some(1));
        assert_eq!(recency_days("5 days ago"), Some(5));
        assert_eq!(recency_days("1 week ago"), Some(7));
        assert_eq!(recency_days("2 weeks ago"), Some(14));
        assert_eq!(recency_days("3 months ago"), Some(UNKNOWN_RECENCY_DAYS));
        assert_eq!(recency_days("last month"), Some(UNKNOWN_RECENCY_DAYS));
        assert_eq!(recency_days("yesterday"), None);
        assert_eq!(recency_days("a day ago"), None);
    }

    #[test]
    fn test_recency_days_huge_week_count_is_unreadable() {
        assert_eq!(recency_days("2000000000000000000 weeks ago"), None);
        assert_eq!(
            recency_days("1317624576693539401 weeks ago"),
            Some(1317624576693539401 * 7)
        );
    }

    #[test]
    fn test_salary_value_concatenates_digits() {
        assert_eq!(salary_value("$100,000 - $130,000"), Some(100_000_130.0));
        assert_eq!(salary_value("$90,000 - $120,000"), Some(90_000_120.0));
        assert_eq!(salary_value("$85,000"), Some(85.0));
    }

    #[test]
    fn test_salary_value_without_digits() {
        assert_eq!(salary_value("Competitive"), None);
        assert_eq!(salary_value(""), None);
    }
}
