use chrono::{DateTime, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{
        normalizers,
        value_objects::{RawParams, SortOrder},
    },
};

pub const ORDER_DEFAULT_SORT_FIELD: &str = "createdAt";

/// Fully-typed order list request, built fresh per incoming request and
/// discarded once the query has run.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListParams {
    pub page: u64,
    pub limit: u64,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub status: Option<String>,
    pub total_amount_from: Option<f64>,
    pub total_amount_to: Option<f64>,
    pub order_date_from: Option<DateTime<Utc>>,
    pub order_date_to: Option<DateTime<Utc>>,
    pub search: Option<String>,
}

impl OrderListParams {
    /// Normalize the raw query bag for the orders list endpoint. Fails on
    /// the first invalid scalar; `sortField` is only guaranteed non-empty
    /// here, the permitted set is enforced by the filter builder.
    pub fn from_raw(raw: &RawParams, default_limit: u64) -> Result<Self, CoreError> {
        Ok(Self {
            page: normalizers::positive_int(raw.single("page")?, "page", 1)?,
            limit: normalizers::normalize_limit(raw.single("limit")?, default_limit),
            sort_field: raw
                .single("sortField")?
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .unwrap_or(ORDER_DEFAULT_SORT_FIELD)
                .to_string(),
            sort_order: normalizers::sort_order(raw.single("sortOrder")?, SortOrder::Desc)?,
            status: raw.single("status")?.map(str::to_string),
            total_amount_from: normalizers::non_negative_number(
                raw.single("totalAmountFrom")?,
                "totalAmountFrom",
            )?,
            total_amount_to: normalizers::non_negative_number(
                raw.single("totalAmountTo")?,
                "totalAmountTo",
            )?,
            order_date_from: normalizers::date(raw.single("orderDateFrom")?, "orderDateFrom")?,
            order_date_to: normalizers::date(raw.single("orderDateTo")?, "orderDateTo")?,
            search: normalizers::sanitize_search(raw.single("search")?)?,
        })
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(items: &[(&str, &str)]) -> RawParams {
        RawParams::from_pairs(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn empty_bag_yields_defaults() {
        let params = OrderListParams::from_raw(&RawParams::new(), 10).unwrap();

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort_field, "createdAt");
        assert_eq!(params.sort_order, SortOrder::Desc);
        assert_eq!(params.status, None);
        assert_eq!(params.search, None);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn oversized_limit_is_capped_at_default() {
        let params = OrderListParams::from_raw(&raw(&[("page", "2"), ("limit", "999")]), 10).unwrap();

        assert_eq!(params.page, 2);
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset(), 10);
    }

    #[test]
    fn invalid_sort_order_fails() {
        let err = OrderListParams::from_raw(&raw(&[("sortOrder", "up")]), 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter(msg) if msg.contains("up")));
    }

    #[test]
    fn invalid_page_cites_raw_value() {
        let err = OrderListParams::from_raw(&raw(&[("page", "zero")]), 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter(msg) if msg.contains("zero")));
    }

    #[test]
    fn ranges_and_search_are_normalized() {
        let params = OrderListParams::from_raw(
            &raw(&[
                ("totalAmountFrom", "10"),
                ("totalAmountTo", "99.5"),
                ("orderDateFrom", "2024-01-01"),
                ("search", "acme corp"),
            ]),
            25,
        )
        .unwrap();

        assert_eq!(params.total_amount_from, Some(10.0));
        assert_eq!(params.total_amount_to, Some(99.5));
        assert!(params.order_date_from.is_some());
        assert_eq!(params.order_date_to, None);
        assert_eq!(params.search.as_deref(), Some("acme corp"));
    }

    #[test]
    fn repeated_field_fails_with_shape_error() {
        let err =
            OrderListParams::from_raw(&raw(&[("status", "new"), ("status", "shipped")]), 10)
                .unwrap_err();
        assert_eq!(err, CoreError::InvalidParameterShape("status".to_string()));
    }

    #[test]
    fn search_with_disallowed_characters_fails() {
        let err = OrderListParams::from_raw(&raw(&[("search", "a;drop")]), 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSearchTerm(_)));
    }
}
