use std::collections::HashMap;

use axum_helpers::extractors::empty_string_as_none;
use domain_products::Product;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Order lifecycle status
///
/// Transitions are not enforced; any value may replace any other.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Pending,
    Completed,
}

/// Order entity as stored in MongoDB
///
/// `products` holds Product IDs. They are not checked on write, so an ID
/// may refer to a product that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub buyer_email: String,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// DTO for creating a new order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[validate(length(min = 1))]
    pub buyer_email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_product_ids"))]
    pub products: Vec<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// DTO for editing an order; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[validate(length(min = 1))]
    pub buyer_email: Option<String>,
    /// Replaces the whole reference list
    #[validate(custom(function = "validate_product_ids"))]
    pub products: Option<Vec<String>>,
    pub status: Option<OrderStatus>,
}

/// Query parameters for listing orders
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderFilter {
    /// Only orders referencing this product ID
    #[serde(rename = "productId", default, deserialize_with = "empty_string_as_none")]
    pub product_id: Option<String>,
    /// Only orders in this status
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<OrderStatus>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            product_id: None,
            status: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> i64 {
    25
}

fn validate_product_ids(ids: &[String]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| id.trim().is_empty()) {
        return Err(ValidationError::new("empty_product_id"));
    }
    Ok(())
}

/// A product reference after resolution
///
/// Serializes as the full product document, or as the bare ID string when
/// the product could not be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProductRef {
    Resolved(Product),
    Missing(String),
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Resolved(product) => &product.id,
            ProductRef::Missing(id) => id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ProductRef::Resolved(_))
    }
}

/// Order with its product references replaced by product documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithProducts {
    #[serde(rename = "_id")]
    pub id: String,
    pub buyer_email: String,
    pub products: Vec<ProductRef>,
    pub status: OrderStatus,
}

impl Order {
    /// Create a new order from CreateOrder DTO
    pub fn new(input: CreateOrder) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            buyer_email: input.buyer_email,
            products: input.products,
            status: input.status,
        }
    }

    /// Apply changes from UpdateOrder DTO
    pub fn apply_update(&mut self, update: UpdateOrder) {
        if let Some(buyer_email) = update.buyer_email {
            self.buyer_email = buyer_email;
        }
        if let Some(products) = update.products {
            self.products = products;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Swap each product ID for its document, keeping stored order and
    /// duplicates. IDs absent from `found` stay as bare IDs.
    pub fn with_products(self, found: Vec<Product>) -> OrderWithProducts {
        let by_id: HashMap<String, Product> = found
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        let products = self
            .products
            .into_iter()
            .map(|id| match by_id.get(&id) {
                Some(product) => ProductRef::Resolved(product.clone()),
                None => ProductRef::Missing(id),
            })
            .collect();

        OrderWithProducts {
            id: self.id,
            buyer_email: self.buyer_email,
            products,
            status: self.status,
        }
    }

    /// Distinct product IDs in first-seen order
    pub fn product_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.products
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn product(id: &str) -> Product {
        serde_json::from_value(json!({
            "_id": id,
            "likes": 1,
            "urls": { "regular": "r", "small": "s", "thumb": "t" },
            "links": { "self": "x", "html": "y" },
            "user": { "id": "u1", "first_name": "A", "username": "a" }
        }))
        .unwrap()
    }

    fn order(products: &[&str]) -> Order {
        Order {
            id: "o1".to_string(),
            buyer_email: "buyer@example.com".to_string(),
            products: products.iter().map(|s| s.to_string()).collect(),
            status: OrderStatus::Created,
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(OrderStatus::Completed).unwrap(), "COMPLETED");
        assert_eq!(OrderStatus::Pending.to_string(), "PENDING");
        assert_eq!(OrderStatus::from_str("CREATED").unwrap(), OrderStatus::Created);
        assert!(serde_json::from_value::<OrderStatus>(json!("SHIPPED")).is_err());
    }

    #[test]
    fn test_order_serializes_camel_case_with_id() {
        let value = serde_json::to_value(order(&["p1"])).unwrap();
        assert_eq!(value["_id"], "o1");
        assert_eq!(value["buyerEmail"], "buyer@example.com");
        assert_eq!(value["status"], "CREATED");
    }

    #[test]
    fn test_create_order_defaults() {
        let input: CreateOrder =
            serde_json::from_value(json!({ "buyerEmail": "b@example.com" })).unwrap();
        let order = Order::new(input);

        assert_eq!(order.status, OrderStatus::Created);
        assert!(order.products.is_empty());
        assert!(!order.id.is_empty());
    }

    #[test]
    fn test_create_order_requires_buyer_email() {
        let missing = serde_json::from_value::<CreateOrder>(json!({ "products": ["p1"] }));
        assert!(missing.is_err());

        let empty: CreateOrder = serde_json::from_value(json!({ "buyerEmail": "" })).unwrap();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_blank_product_id_is_invalid() {
        let input: CreateOrder = serde_json::from_value(json!({
            "buyerEmail": "b@example.com",
            "products": ["p1", " "]
        }))
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_apply_update_replaces_products_and_keeps_others() {
        let mut order = order(&["p1", "p2"]);
        order.apply_update(UpdateOrder {
            products: Some(vec!["p3".to_string()]),
            status: Some(OrderStatus::Completed),
            ..Default::default()
        });

        assert_eq!(order.products, vec!["p3".to_string()]);
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.buyer_email, "buyer@example.com");
    }

    #[test]
    fn test_backward_status_transition_is_allowed() {
        let mut order = order(&[]);
        order.status = OrderStatus::Completed;
        order.apply_update(UpdateOrder {
            status: Some(OrderStatus::Created),
            ..Default::default()
        });
        assert_eq!(order.status, OrderStatus::Created);
    }

    #[test]
    fn test_with_products_keeps_order_and_missing_ids() {
        let resolved = order(&["p2", "gone", "p1", "p2"])
            .with_products(vec![product("p1"), product("p2")]);

        let ids: Vec<&str> = resolved.products.iter().map(ProductRef::id).collect();
        assert_eq!(ids, vec!["p2", "gone", "p1", "p2"]);
        assert!(resolved.products[0].is_resolved());
        assert_eq!(resolved.products[1], ProductRef::Missing("gone".to_string()));
    }

    #[test]
    fn test_missing_ref_serializes_as_bare_id() {
        let resolved = order(&["p1", "gone"]).with_products(vec![product("p1")]);
        let value = serde_json::to_value(&resolved).unwrap();

        assert_eq!(value["products"][0]["_id"], "p1");
        assert_eq!(value["products"][1], "gone");
    }

    #[test]
    fn test_product_ids_are_distinct() {
        assert_eq!(
            order(&["p2", "p1", "p2"]).product_ids(),
            vec!["p2".to_string(), "p1".to_string()]
        );
    }

    #[test]
    fn test_filter_reads_product_id_param_name() {
        let filter: OrderFilter =
            serde_json::from_value(json!({ "productId": "p1", "status": "PENDING" })).unwrap();
        assert_eq!(filter.product_id.as_deref(), Some("p1"));
        assert_eq!(filter.status, Some(OrderStatus::Pending));
        assert_eq!(filter.limit, 25);
        assert_eq!(filter.offset, 0);
    }

    #[test]
    fn test_filter_treats_empty_values_as_absent() {
        let filter: OrderFilter =
            serde_json::from_value(json!({ "productId": "", "status": "" })).unwrap();
        assert!(filter.product_id.is_none());
        assert!(filter.status.is_none());
    }
}
