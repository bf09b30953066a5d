use axum_helpers::extractors::empty_string_as_none;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Image URLs in the three sizes served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImageUrls {
    #[validate(length(min = 1))]
    pub regular: String,
    #[validate(length(min = 1))]
    pub small: String,
    #[validate(length(min = 1))]
    pub thumb: String,
}

/// Canonical links for a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductLinks {
    /// API link to the product itself
    #[serde(rename = "self")]
    #[validate(length(min = 1))]
    pub self_link: String,
    /// Public HTML page
    #[validate(length(min = 1))]
    pub html: String,
}

/// Attribution record for the author of the product image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductUser {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[validate(length(min = 1))]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Tag {
    #[validate(length(min = 1))]
    pub title: String,
}

impl Tag {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
    pub likes: i64,
    pub urls: ImageUrls,
    pub links: ProductLinks,
    pub user: ProductUser,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub likes: i64,
    #[validate(nested)]
    pub urls: ImageUrls,
    #[validate(nested)]
    pub links: ProductLinks,
    #[validate(nested)]
    pub user: ProductUser,
    #[serde(default)]
    #[validate(nested)]
    pub tags: Vec<Tag>,
}

/// DTO for editing an existing product
///
/// Every field present replaces the stored value as a whole. Nested objects
/// are not merged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub likes: Option<i64>,
    #[validate(nested)]
    pub urls: Option<ImageUrls>,
    #[validate(nested)]
    pub links: Option<ProductLinks>,
    #[validate(nested)]
    pub user: Option<ProductUser>,
    #[validate(nested)]
    pub tags: Option<Vec<Tag>>,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Only products carrying a tag with exactly this title; empty means no filter
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tag: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            tag: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> i64 {
    25
}

/// Confirmation returned after a product is deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn product_deleted() -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
        }
    }
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            description: input.description,
            alt_description: input.alt_description,
            likes: input.likes,
            urls: input.urls,
            links: input.links,
            user: input.user,
            tags: input.tags,
        }
    }

    /// Apply changes from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(alt_description) = update.alt_description {
            self.alt_description = Some(alt_description);
        }
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
        if let Some(urls) = update.urls {
            self.urls = urls;
        }
        if let Some(links) = update.links {
            self.links = links;
        }
        if let Some(user) = update.user {
            self.user = user;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
    }

    pub fn has_tag(&self, title: &str) -> bool {
        self.tags.iter().any(|tag| tag.title == title)
    }
}
