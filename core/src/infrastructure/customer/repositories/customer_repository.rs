use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::{app_errors::CoreError, pagination::Paginated},
        customer::{
            entities::Customer,
            ports::CustomerRepository,
            value_objects::{
                CUSTOMER_DEFAULT_SORT_FIELD, CUSTOMER_SEARCH_MAX_LEN, CustomerListParams,
            },
        },
        query::value_objects::SortOrder,
    },
    infrastructure::{
        customer::mappers::{CustomerDocument, map_customer},
        db::filters::{date_range, int_range, number_range, pattern_match},
    },
};

const COLLECTION: &str = "customers";
const ORDERS_COLLECTION: &str = "orders";

fn sort_column(field: &str) -> Option<&'static str> {
    match field {
        "registrationDate" => Some("registration_date"),
        "lastOrderDate" => Some("last_order_date"),
        "totalAmount" => Some("total_amount"),
        "orderCount" => Some("order_count"),
        "firstName" => Some("first_name"),
        "lastName" => Some("last_name"),
        "email" => Some("email"),
        _ => None,
    }
}

/// Customer search terms are bounded in length; longer terms are a soft
/// no-op, consistent with the orders path. The escaping backslashes the
/// sanitizer added do not count towards the bound.
fn is_searchable_term(term: &str) -> bool {
    term.chars().filter(|&c| c != '\\').count() <= CUSTOMER_SEARCH_MAX_LEN
}

fn sort_document(params: &CustomerListParams) -> Document {
    let column = sort_column(&params.sort_field)
        .or_else(|| sort_column(CUSTOMER_DEFAULT_SORT_FIELD))
        .unwrap_or("registration_date");
    let direction = match params.sort_order {
        SortOrder::Asc => 1,
        SortOrder::Desc => -1,
    };
    doc! { column: direction }
}

/// Range conditions common to every customer list query. Search is layered
/// on separately because it may need the order-address lookup.
fn base_filter_document(params: &CustomerListParams) -> Document {
    let mut filter = Document::new();

    if let Some(range) = date_range(params.registration_date_from, params.registration_date_to) {
        filter.insert("registration_date", range);
    }
    if let Some(range) = date_range(params.last_order_date_from, params.last_order_date_to) {
        filter.insert("last_order_date", range);
    }
    if let Some(range) = number_range(params.total_amount_from, params.total_amount_to) {
        filter.insert("total_amount", range);
    }
    if let Some(range) = int_range(params.order_count_from, params.order_count_to) {
        filter.insert("order_count", range);
    }

    filter
}

/// Case-insensitive disjunction over the customer's own text fields,
/// extended with ids of customers whose orders shipped to a matching
/// address.
fn search_disjunction(term: &str, address_matched_ids: &[String]) -> Vec<Document> {
    let mut arms = vec![
        doc! { "first_name": pattern_match(term) },
        doc! { "last_name": pattern_match(term) },
        doc! { "email": pattern_match(term) },
        doc! { "phone": pattern_match(term) },
    ];
    if !address_matched_ids.is_empty() {
        arms.push(doc! { "_id": { "$in": address_matched_ids.to_vec() } });
    }
    arms
}

#[derive(Debug, Clone)]
pub struct MongoCustomerRepository {
    collection: Collection<CustomerDocument>,
    orders: Collection<Document>,
}

impl MongoCustomerRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
            orders: db.collection(ORDERS_COLLECTION),
        }
    }

    /// Ids of customers that have at least one order shipped to an address
    /// matching the term.
    async fn customers_with_matching_address(
        &self,
        term: &str,
    ) -> Result<Vec<String>, CoreError> {
        let filter = doc! {
            "$or": [
                { "shipping_address.street": pattern_match(term) },
                { "shipping_address.city": pattern_match(term) },
            ]
        };

        let ids = self
            .orders
            .distinct("customer_id", filter)
            .await
            .map_err(|e| {
                error!("Failed to match orders by shipping address: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ids
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(id) => Some(id),
                _ => None,
            })
            .collect())
    }
}

impl CustomerRepository for MongoCustomerRepository {
    async fn list(&self, params: CustomerListParams) -> Result<Paginated<Customer>, CoreError> {
        let mut filter = base_filter_document(&params);

        if let Some(term) = params.search.as_deref().filter(|t| is_searchable_term(t)) {
            let matched_ids = self.customers_with_matching_address(term).await?;
            filter.insert("$or", search_disjunction(term, &matched_ids));
        }

        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| {
                error!("Failed to count customers: {}", e);
                CoreError::InternalServerError
            })?;

        let documents: Vec<CustomerDocument> = self
            .collection
            .find(filter)
            .sort(sort_document(&params))
            .skip(params.offset())
            .limit(params.limit as i64)
            .await
            .map_err(|e| {
                error!("Failed to query customers: {}", e);
                CoreError::InternalServerError
            })?
            .try_collect()
            .await
            .map_err(|e| {
                error!("Failed to read customer cursor: {}", e);
                CoreError::InternalServerError
            })?;

        let items = documents
            .into_iter()
            .map(map_customer)
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Paginated { items, total })
    }

    async fn get_by_id(&self, customer_id: Uuid) -> Result<Option<Customer>, CoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": customer_id.to_string() })
            .await
            .map_err(|e| {
                error!("Failed to get customer: {}", e);
                CoreError::InternalServerError
            })?;

        document.map(map_customer).transpose()
    }

    async fn create(&self, customer: Customer) -> Result<Customer, CoreError> {
        self.collection
            .insert_one(CustomerDocument::from(&customer))
            .await
            .map_err(|e| {
                error!("Failed to create customer: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, CoreError> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": customer.id.to_string() },
                CustomerDocument::from(&customer),
            )
            .await
            .map_err(|e| {
                error!("Failed to update customer: {}", e);
                CoreError::InternalServerError
            })?;

        if result.matched_count == 0 {
            return Err(CoreError::NotFound(format!(
                "customer {} not found",
                customer.id
            )));
        }

        Ok(customer)
    }

    async fn delete(&self, customer_id: Uuid) -> Result<(), CoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": customer_id.to_string() })
            .await
            .map_err(|e| {
                error!("Failed to delete customer: {}", e);
                CoreError::InternalServerError
            })?;

        if result.deleted_count == 0 {
            return Err(CoreError::NotFound(format!(
                "customer {customer_id} not found"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn params() -> CustomerListParams {
        CustomerListParams {
            page: 1,
            limit: 10,
            sort_field: CUSTOMER_DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
            registration_date_from: None,
            registration_date_to: None,
            last_order_date_from: None,
            last_order_date_to: None,
            total_amount_from: None,
            total_amount_to: None,
            order_count_from: None,
            order_count_to: None,
            search: None,
        }
    }

    #[test]
    fn base_filter_collects_all_present_ranges() {
        let mut p = params();
        p.registration_date_from = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        p.total_amount_to = Some(500.0);
        p.order_count_from = Some(3);

        let filter = base_filter_document(&p);
        assert!(filter.contains_key("registration_date"));
        assert_eq!(
            filter.get_document("total_amount").unwrap(),
            &doc! { "$lte": 500.0 }
        );
        assert_eq!(
            filter.get_document("order_count").unwrap(),
            &doc! { "$gte": 3_i64 }
        );
        assert!(!filter.contains_key("last_order_date"));
    }

    #[test]
    fn registration_date_upper_bound_covers_the_whole_day() {
        let mut p = params();
        p.registration_date_to = Some(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap());

        let bound = base_filter_document(&p)
            .get_document("registration_date")
            .unwrap()
            .get_datetime("$lte")
            .unwrap()
            .to_chrono();
        assert_eq!(bound.to_rfc3339(), "2024-06-30T23:59:59.999+00:00");
    }

    #[test]
    fn disjunction_covers_customer_text_fields() {
        let arms = search_disjunction("hopper", &[]);
        assert_eq!(arms.len(), 4);
        assert_eq!(
            arms[0],
            doc! { "first_name": { "$regex": "hopper", "$options": "i" } }
        );
    }

    #[test]
    fn address_matches_extend_the_disjunction() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let arms = search_disjunction("elm street", &ids);

        assert_eq!(arms.len(), 5);
        assert_eq!(arms[4], doc! { "_id": { "$in": ["a", "b"] } });
    }

    #[test]
    fn oversized_term_is_out_of_policy() {
        let long = "a".repeat(CUSTOMER_SEARCH_MAX_LEN + 1);
        assert!(!is_searchable_term(&long));
        assert!(is_searchable_term(&"a".repeat(CUSTOMER_SEARCH_MAX_LEN)));
    }

    #[test]
    fn escape_backslashes_do_not_count_towards_the_bound() {
        // 26 dots escape to 52 characters but stay within the 50-char policy.
        let term = "\\.".repeat(26);
        assert!(is_searchable_term(&term));
    }

    #[test]
    fn unlisted_sort_field_falls_back_to_registration_date() {
        let mut p = params();
        p.sort_field = "shoeSize".to_string();

        assert_eq!(sort_document(&p), doc! { "registration_date": -1 });
    }
}
