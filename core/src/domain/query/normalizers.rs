use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::domain::{common::entities::app_errors::CoreError, query::value_objects::SortOrder};

/// Characters a search term may contain. The backslash is admitted so that
/// output of [`sanitize_search`] passes a second pass unchanged.
static SEARCH_ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-_.+%\\]+$").expect("valid pattern"));

const REGEX_META: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Parse a positive integer, falling back to `default` when the field is
/// absent.
pub fn positive_int(value: Option<&str>, field: &str, default: u64) -> Result<u64, CoreError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(CoreError::InvalidParameter(format!(
            "{field} must be a positive integer, got '{raw}'"
        ))),
    }
}

/// Parse a finite number `>= 0`. Absent fields stay absent.
pub fn non_negative_number(value: Option<&str>, field: &str) -> Result<Option<f64>, CoreError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(Some(parsed)),
        _ => Err(CoreError::InvalidParameter(format!(
            "{field} must be a non-negative number, got '{raw}'"
        ))),
    }
}

/// Parse an integer `>= 0`. Absent fields stay absent.
pub fn non_negative_int(value: Option<&str>, field: &str) -> Result<Option<u64>, CoreError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(CoreError::InvalidParameter(format!(
            "{field} must be a non-negative integer, got '{raw}'"
        ))),
    }
}

/// Parse a calendar date or date-time. Accepts RFC 3339, a naive
/// `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD` (midnight UTC).
pub fn date(value: Option<&str>, field: &str) -> Result<Option<DateTime<Utc>>, CoreError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Some(parsed.and_utc()));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return Ok(Some(midnight.and_utc()));
        }
    }

    Err(CoreError::InvalidParameter(format!(
        "{field} must be a valid date, got '{raw}'"
    )))
}

/// Parse a sort direction. Only the exact strings `asc` and `desc` are
/// accepted; absence yields `default`.
pub fn sort_order(value: Option<&str>, default: SortOrder) -> Result<SortOrder, CoreError> {
    match value {
        None => Ok(default),
        Some("asc") => Ok(SortOrder::Asc),
        Some("desc") => Ok(SortOrder::Desc),
        Some(other) => Err(CoreError::InvalidParameter(format!(
            "sortOrder must be 'asc' or 'desc', got '{other}'"
        ))),
    }
}

/// Validate and escape a search term so it can be embedded into a
/// pattern-match filter. Validation runs before escaping: input outside the
/// allow-list is rejected outright instead of being sanitized into the
/// query. Whitespace-only input counts as absent.
pub fn sanitize_search(value: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !SEARCH_ALLOWED.is_match(trimmed) {
        return Err(CoreError::InvalidSearchTerm(format!(
            "'{trimmed}' contains unsupported characters"
        )));
    }
    Ok(Some(escape_pattern(trimmed)))
}

/// Backslash-escape regex metacharacters. Pairs that are already escaped
/// are copied through verbatim, which keeps the function idempotent.
fn escape_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() * 2);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if REGEX_META.contains(&next) {
                    escaped.push('\\');
                    escaped.push(next);
                    chars.next();
                    continue;
                }
            }
            escaped.push_str("\\\\");
        } else if REGEX_META.contains(&c) {
            escaped.push('\\');
            escaped.push(c);
        } else {
            escaped.push(c);
        }
    }

    escaped
}

/// Normalize a requested page size. Unlike the fail-fast normalizers above,
/// a missing, unparseable, or non-positive value falls back to the
/// configured default, and anything larger is capped at that same default.
/// Never fails.
pub fn normalize_limit(value: Option<&str>, default: u64) -> u64 {
    match value.and_then(|raw| raw.trim().parse::<i64>().ok()) {
        Some(parsed) if parsed > 0 => (parsed as u64).min(default),
        _ => default,
    }
}

/// Extend a date to the last instant of its calendar day, so a date-only
/// upper bound covers the whole day instead of just its midnight instant.
pub fn end_of_day(value: DateTime<Utc>) -> DateTime<Utc> {
    value
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .map(|t| t.and_utc())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn positive_int_parses_valid_values() {
        assert_eq!(positive_int(Some("2"), "page", 1).unwrap(), 2);
        assert_eq!(positive_int(Some(" 17 "), "page", 1).unwrap(), 17);
    }

    #[test]
    fn positive_int_uses_default_when_absent() {
        assert_eq!(positive_int(None, "page", 1).unwrap(), 1);
    }

    #[test]
    fn positive_int_rejects_zero_negative_and_garbage() {
        for bad in ["0", "-3", "1.5", "abc", ""] {
            let err = positive_int(Some(bad), "page", 1).unwrap_err();
            assert!(matches!(err, CoreError::InvalidParameter(msg) if msg.contains(bad) || bad.is_empty()));
        }
    }

    #[test]
    fn non_negative_number_accepts_zero_and_decimals() {
        assert_eq!(non_negative_number(Some("0"), "totalAmountFrom").unwrap(), Some(0.0));
        assert_eq!(
            non_negative_number(Some("99.95"), "totalAmountFrom").unwrap(),
            Some(99.95)
        );
        assert_eq!(non_negative_number(None, "totalAmountFrom").unwrap(), None);
    }

    #[test]
    fn non_negative_number_rejects_negative_nan_and_infinite() {
        for bad in ["-1", "NaN", "inf", "ten"] {
            assert!(non_negative_number(Some(bad), "totalAmountFrom").is_err());
        }
    }

    #[test]
    fn non_negative_int_accepts_zero() {
        assert_eq!(non_negative_int(Some("0"), "orderCountFrom").unwrap(), Some(0));
        assert!(non_negative_int(Some("-1"), "orderCountFrom").is_err());
        assert!(non_negative_int(Some("2.5"), "orderCountFrom").is_err());
    }

    #[test]
    fn date_accepts_rfc3339_naive_and_bare_dates() {
        let full = date(Some("2024-03-05T12:30:00Z"), "orderDateFrom")
            .unwrap()
            .unwrap();
        assert_eq!(full.hour(), 12);

        let naive = date(Some("2024-03-05T12:30:00"), "orderDateFrom")
            .unwrap()
            .unwrap();
        assert_eq!(naive.minute(), 30);

        let bare = date(Some("2024-03-05"), "orderDateFrom").unwrap().unwrap();
        assert_eq!((bare.hour(), bare.minute()), (0, 0));
    }

    #[test]
    fn date_rejects_garbage() {
        assert!(date(Some("05/03/2024"), "orderDateFrom").is_err());
        assert!(date(Some("yesterday"), "orderDateFrom").is_err());
    }

    #[test]
    fn sort_order_accepts_exactly_asc_and_desc() {
        assert_eq!(sort_order(Some("asc"), SortOrder::Desc).unwrap(), SortOrder::Asc);
        assert_eq!(sort_order(Some("desc"), SortOrder::Desc).unwrap(), SortOrder::Desc);
        assert_eq!(sort_order(None, SortOrder::Desc).unwrap(), SortOrder::Desc);
        assert!(sort_order(Some("up"), SortOrder::Desc).is_err());
        assert!(sort_order(Some("ASC"), SortOrder::Desc).is_err());
    }

    #[test]
    fn sanitize_search_passes_plain_terms_through() {
        assert_eq!(sanitize_search(Some("blue widget")).unwrap().unwrap(), "blue widget");
    }

    #[test]
    fn sanitize_search_treats_blank_as_absent() {
        assert_eq!(sanitize_search(None).unwrap(), None);
        assert_eq!(sanitize_search(Some("   ")).unwrap(), None);
    }

    #[test]
    fn sanitize_search_escapes_metacharacters() {
        assert_eq!(sanitize_search(Some("v2.0+")).unwrap().unwrap(), "v2\\.0\\+");
    }

    #[test]
    fn sanitize_search_rejects_characters_outside_allow_list() {
        for bad in ["O'Brien", "a;b", "x=y", "<script>", "50€"] {
            assert!(matches!(
                sanitize_search(Some(bad)),
                Err(CoreError::InvalidSearchTerm(_))
            ));
        }
    }

    #[test]
    fn sanitize_search_is_stable_on_its_own_output() {
        for term in ["v2.0+", "plain words", "a-b_c.d%e", "100.00"] {
            let once = sanitize_search(Some(term)).unwrap().unwrap();
            let twice = sanitize_search(Some(&once)).unwrap().unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn normalize_limit_caps_at_default() {
        assert_eq!(normalize_limit(Some("999"), 10), 10);
        assert_eq!(normalize_limit(Some("5"), 10), 5);
        assert_eq!(normalize_limit(Some("10"), 10), 10);
    }

    #[test]
    fn normalize_limit_falls_back_on_bad_input() {
        assert_eq!(normalize_limit(None, 10), 10);
        assert_eq!(normalize_limit(Some("0"), 10), 10);
        assert_eq!(normalize_limit(Some("-5"), 10), 10);
        assert_eq!(normalize_limit(Some("many"), 10), 10);
    }

    #[test]
    fn end_of_day_lands_on_last_millisecond() {
        let midnight = date(Some("2024-03-05"), "orderDateTo").unwrap().unwrap();
        let end = end_of_day(midnight);
        assert_eq!(end.to_rfc3339(), "2024-03-05T23:59:59.999+00:00");
    }
}
