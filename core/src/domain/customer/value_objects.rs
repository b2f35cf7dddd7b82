use chrono::{DateTime, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{
        normalizers,
        value_objects::{RawParams, SortOrder},
    },
};

pub const CUSTOMER_DEFAULT_SORT_FIELD: &str = "registrationDate";

/// Longest search term the customer list accepts; anything longer is
/// ignored by the filter builder rather than rejected.
pub const CUSTOMER_SEARCH_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerListParams {
    pub page: u64,
    pub limit: u64,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub registration_date_from: Option<DateTime<Utc>>,
    pub registration_date_to: Option<DateTime<Utc>>,
    pub last_order_date_from: Option<DateTime<Utc>>,
    pub last_order_date_to: Option<DateTime<Utc>>,
    pub total_amount_from: Option<f64>,
    pub total_amount_to: Option<f64>,
    pub order_count_from: Option<u64>,
    pub order_count_to: Option<u64>,
    pub search: Option<String>,
}

impl CustomerListParams {
    /// Normalize the raw query bag for the customers list endpoint.
    /// Fail-fast: the first invalid scalar aborts the whole request.
    pub fn from_raw(raw: &RawParams, default_limit: u64) -> Result<Self, CoreError> {
        Ok(Self {
            page: normalizers::positive_int(raw.single("page")?, "page", 1)?,
            limit: normalizers::normalize_limit(raw.single("limit")?, default_limit),
            sort_field: raw
                .single("sortField")?
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .unwrap_or(CUSTOMER_DEFAULT_SORT_FIELD)
                .to_string(),
            sort_order: normalizers::sort_order(raw.single("sortOrder")?, SortOrder::Desc)?,
            registration_date_from: normalizers::date(
                raw.single("registrationDateFrom")?,
                "registrationDateFrom",
            )?,
            registration_date_to: normalizers::date(
                raw.single("registrationDateTo")?,
                "registrationDateTo",
            )?,
            last_order_date_from: normalizers::date(
                raw.single("lastOrderDateFrom")?,
                "lastOrderDateFrom",
            )?,
            last_order_date_to: normalizers::date(
                raw.single("lastOrderDateTo")?,
                "lastOrderDateTo",
            )?,
            total_amount_from: normalizers::non_negative_number(
                raw.single("totalAmountFrom")?,
                "totalAmountFrom",
            )?,
            total_amount_to: normalizers::non_negative_number(
                raw.single("totalAmountTo")?,
                "totalAmountTo",
            )?,
            order_count_from: normalizers::non_negative_int(
                raw.single("orderCountFrom")?,
                "orderCountFrom",
            )?,
            order_count_to: normalizers::non_negative_int(
                raw.single("orderCountTo")?,
                "orderCountTo",
            )?,
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
    fn empty_bag_yields_customer_defaults() {
        let params = CustomerListParams::from_raw(&RawParams::new(), 10).unwrap();

        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.sort_field, "registrationDate");
        assert_eq!(params.sort_order, SortOrder::Desc);
    }

    #[test]
    fn apostrophe_in_search_is_rejected() {
        let err = CustomerListParams::from_raw(&raw(&[("search", "O'Brien")]), 10).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSearchTerm(_)));
    }

    #[test]
    fn order_count_range_parses_as_integers() {
        let params = CustomerListParams::from_raw(
            &raw(&[("orderCountFrom", "0"), ("orderCountTo", "12")]),
            10,
        )
        .unwrap();

        assert_eq!(params.order_count_from, Some(0));
        assert_eq!(params.order_count_to, Some(12));

        assert!(CustomerListParams::from_raw(&raw(&[("orderCountFrom", "1.5")]), 10).is_err());
    }

    #[test]
    fn one_sided_date_range_is_legal() {
        let params =
            CustomerListParams::from_raw(&raw(&[("lastOrderDateTo", "2024-06-30")]), 10).unwrap();

        assert_eq!(params.last_order_date_from, None);
        assert!(params.last_order_date_to.is_some());
    }
}
