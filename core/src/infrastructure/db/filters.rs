use bson::{DateTime as BsonDateTime, Document, doc};
use chrono::{DateTime, Utc};

use crate::domain::query::normalizers::end_of_day;

/// Inclusive numeric range condition; either side optional, `None` when
/// both are absent.
pub fn number_range(from: Option<f64>, to: Option<f64>) -> Option<Document> {
    let mut range = Document::new();
    if let Some(value) = from {
        range.insert("$gte", value);
    }
    if let Some(value) = to {
        range.insert("$lte", value);
    }
    (!range.is_empty()).then_some(range)
}

pub fn int_range(from: Option<u64>, to: Option<u64>) -> Option<Document> {
    let mut range = Document::new();
    if let Some(value) = from {
        range.insert("$gte", value as i64);
    }
    if let Some(value) = to {
        range.insert("$lte", value as i64);
    }
    (!range.is_empty()).then_some(range)
}

/// Inclusive date range condition. The upper bound is extended to the end
/// of its calendar day so a date-only bound covers the whole day.
pub fn date_range(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Option<Document> {
    let mut range = Document::new();
    if let Some(value) = from {
        range.insert("$gte", BsonDateTime::from_chrono(value));
    }
    if let Some(value) = to {
        range.insert("$lte", BsonDateTime::from_chrono(end_of_day(value)));
    }
    (!range.is_empty()).then_some(range)
}

/// Case-insensitive pattern match against an already-sanitized term.
pub fn pattern_match(term: &str) -> Document {
    doc! { "$regex": term, "$options": "i" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn one_sided_ranges_are_legal() {
        assert_eq!(
            number_range(Some(10.0), None),
            Some(doc! { "$gte": 10.0 })
        );
        assert_eq!(number_range(None, Some(99.5)), Some(doc! { "$lte": 99.5 }));
        assert_eq!(number_range(None, None), None);
    }

    #[test]
    fn date_upper_bound_extends_to_end_of_day() {
        let to = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let range = date_range(None, Some(to)).unwrap();

        let bound = range.get_datetime("$lte").unwrap().to_chrono();
        assert_eq!(bound.to_rfc3339(), "2024-03-05T23:59:59.999+00:00");
    }

    #[test]
    fn date_lower_bound_is_taken_as_is() {
        let from = Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap();
        let range = date_range(Some(from), None).unwrap();

        let bound = range.get_datetime("$gte").unwrap().to_chrono();
        assert_eq!(bound, from);
    }

    #[test]
    fn pattern_match_is_case_insensitive() {
        assert_eq!(
            pattern_match("acme"),
            doc! { "$regex": "acme", "$options": "i" }
        );
    }
}
