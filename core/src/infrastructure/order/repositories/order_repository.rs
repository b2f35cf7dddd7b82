use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::{app_errors::CoreError, pagination::Paginated},
        order::{
            entities::{Order, is_known_status},
            ports::OrderRepository,
            value_objects::{ORDER_DEFAULT_SORT_FIELD, OrderListParams},
        },
        query::value_objects::SortOrder,
    },
    infrastructure::{
        db::filters::{date_range, number_range, pattern_match},
        order::mappers::{OrderDocument, map_order},
    },
};

const COLLECTION: &str = "orders";
const COUNTERS_COLLECTION: &str = "counters";

/// Sortable wire fields mapped to their document columns; doubles as the
/// sort allow-list.
fn sort_column(field: &str) -> Option<&'static str> {
    match field {
        "createdAt" => Some("created_at"),
        "orderDate" => Some("order_date"),
        "orderNumber" => Some("order_number"),
        "totalAmount" => Some("total_amount"),
        "status" => Some("status"),
        "customerName" => Some("customer_name"),
        _ => None,
    }
}

/// Orders accept search terms made of word characters and whitespace only;
/// anything else is a soft no-op rather than an error.
fn is_searchable_term(term: &str) -> bool {
    term.chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
}

fn sort_document(params: &OrderListParams) -> Document {
    let column = sort_column(&params.sort_field)
        .or_else(|| sort_column(ORDER_DEFAULT_SORT_FIELD))
        .unwrap_or("created_at");
    let direction = match params.sort_order {
        SortOrder::Asc => 1,
        SortOrder::Desc => -1,
    };
    doc! { column: direction }
}

fn filter_document(params: &OrderListParams) -> Result<Document, CoreError> {
    let mut filter = Document::new();

    if let Some(status) = &params.status {
        if !is_known_status(status) {
            return Err(CoreError::InvalidParameter(format!(
                "unknown order status '{status}'"
            )));
        }
        filter.insert("status", status.as_str());
    }

    if let Some(range) = number_range(params.total_amount_from, params.total_amount_to) {
        filter.insert("total_amount", range);
    }

    if let Some(range) = date_range(params.order_date_from, params.order_date_to) {
        filter.insert("order_date", range);
    }

    if let Some(term) = params.search.as_deref().filter(|t| is_searchable_term(t)) {
        let mut arms = vec![
            doc! { "customer_name": pattern_match(term) },
            doc! { "customer_email": pattern_match(term) },
        ];
        if let Ok(number) = term.parse::<i64>() {
            arms.push(doc! { "order_number": number });
        }
        filter.insert("$or", arms);
    }

    Ok(filter)
}

#[derive(Debug, Clone)]
pub struct MongoOrderRepository {
    collection: Collection<OrderDocument>,
    counters: Collection<Document>,
}

impl MongoOrderRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
            counters: db.collection(COUNTERS_COLLECTION),
        }
    }
}

impl OrderRepository for MongoOrderRepository {
    async fn list(&self, params: OrderListParams) -> Result<Paginated<Order>, CoreError> {
        let filter = filter_document(&params)?;

        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| {
                error!("Failed to count orders: {}", e);
                CoreError::InternalServerError
            })?;

        let documents: Vec<OrderDocument> = self
            .collection
            .find(filter)
            .sort(sort_document(&params))
            .skip(params.offset())
            .limit(params.limit as i64)
            .await
            .map_err(|e| {
                error!("Failed to query orders: {}", e);
                CoreError::InternalServerError
            })?
            .try_collect()
            .await
            .map_err(|e| {
                error!("Failed to read order cursor: {}", e);
                CoreError::InternalServerError
            })?;

        let items = documents
            .into_iter()
            .map(map_order)
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Paginated { items, total })
    }

    async fn get_by_id(&self, order_id: Uuid) -> Result<Option<Order>, CoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": order_id.to_string() })
            .await
            .map_err(|e| {
                error!("Failed to get order: {}", e);
                CoreError::InternalServerError
            })?;

        document.map(map_order).transpose()
    }

    async fn create(&self, order: Order) -> Result<Order, CoreError> {
        self.collection
            .insert_one(OrderDocument::from(&order))
            .await
            .map_err(|e| {
                error!("Failed to create order: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Order, CoreError> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": order.id.to_string() },
                OrderDocument::from(&order),
            )
            .await
            .map_err(|e| {
                error!("Failed to update order: {}", e);
                CoreError::InternalServerError
            })?;

        if result.matched_count == 0 {
            return Err(CoreError::NotFound(format!("order {} not found", order.id)));
        }

        Ok(order)
    }

    async fn delete(&self, order_id: Uuid) -> Result<(), CoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": order_id.to_string() })
            .await
            .map_err(|e| {
                error!("Failed to delete order: {}", e);
                CoreError::InternalServerError
            })?;

        if result.deleted_count == 0 {
            return Err(CoreError::NotFound(format!("order {order_id} not found")));
        }

        Ok(())
    }

    async fn next_order_number(&self) -> Result<i64, CoreError> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": "order_number" },
                doc! { "$inc": { "value": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                error!("Failed to advance order number counter: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::InternalServerError)?;

        counter.get_i64("value").map_err(|e| {
            error!("Order number counter is corrupt: {}", e);
            CoreError::InternalServerError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::normalizers::sanitize_search;
    use chrono::{TimeZone, Utc};

    fn params() -> OrderListParams {
        OrderListParams {
            page: 1,
            limit: 10,
            sort_field: ORDER_DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
            status: None,
            total_amount_from: None,
            total_amount_to: None,
            order_date_from: None,
            order_date_to: None,
            search: None,
        }
    }

    #[test]
    fn empty_params_build_an_empty_filter() {
        assert_eq!(filter_document(&params()).unwrap(), Document::new());
    }

    #[test]
    fn unknown_status_is_a_hard_error() {
        let mut p = params();
        p.status = Some("archived".to_string());

        let err = filter_document(&p).unwrap_err();
        assert!(matches!(err, CoreError::InvalidParameter(msg) if msg.contains("archived")));
    }

    #[test]
    fn known_status_becomes_an_equality_condition() {
        let mut p = params();
        p.status = Some("shipped".to_string());

        let filter = filter_document(&p).unwrap();
        assert_eq!(filter.get_str("status").unwrap(), "shipped");
    }

    #[test]
    fn amount_and_date_ranges_are_combined() {
        let mut p = params();
        p.total_amount_from = Some(10.0);
        p.order_date_to = Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());

        let filter = filter_document(&p).unwrap();
        assert_eq!(
            filter.get_document("total_amount").unwrap(),
            &doc! { "$gte": 10.0 }
        );
        let bound = filter
            .get_document("order_date")
            .unwrap()
            .get_datetime("$lte")
            .unwrap()
            .to_chrono();
        assert_eq!(bound.to_rfc3339(), "2024-03-05T23:59:59.999+00:00");
    }

    #[test]
    fn search_builds_disjunction_over_name_and_email() {
        let mut p = params();
        p.search = Some("acme corp".to_string());

        let filter = filter_document(&p).unwrap();
        let arms = filter.get_array("$or").unwrap();
        assert_eq!(arms.len(), 2);
    }

    #[test]
    fn numeric_search_adds_order_number_arm() {
        let mut p = params();
        p.search = Some("1042".to_string());

        let filter = filter_document(&p).unwrap();
        let arms = filter.get_array("$or").unwrap();
        assert_eq!(arms.len(), 3);
        assert_eq!(
            arms[2].as_document().unwrap(),
            &doc! { "order_number": 1042_i64 }
        );
    }

    #[test]
    fn escaped_search_term_is_silently_ignored() {
        // "v2.0" survives sanitization as "v2\.0" but is outside the
        // orders word/space policy, so it contributes no condition.
        let mut p = params();
        p.search = sanitize_search(Some("v2.0")).unwrap();

        let filter = filter_document(&p).unwrap();
        assert!(!filter.contains_key("$or"));
    }

    #[test]
    fn unlisted_sort_field_falls_back_to_default() {
        let mut p = params();
        p.sort_field = "surprise".to_string();

        assert_eq!(sort_document(&p), doc! { "created_at": -1 });
    }

    #[test]
    fn listed_sort_field_maps_to_column() {
        let mut p = params();
        p.sort_field = "totalAmount".to_string();
        p.sort_order = SortOrder::Asc;

        assert_eq!(sort_document(&p), doc! { "total_amount": 1 });
    }
}
