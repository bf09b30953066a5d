//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo` (default): Enables MongoDB test infrastructure
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_repository_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_repository_test");
//!     let db = mongo.database(&builder.database_name());
//! }
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for deterministic, per-test data
///
/// The same test name always yields the same values, and different tests
/// get different values, so parallel tests sharing a server don't collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_order");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this builder
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }

    /// Opaque document ID, e.g. `product-1a2b3c-main`
    pub fn id(&self, kind: &str, suffix: &str) -> String {
        format!("{}-{:x}-{}", kind, self.seed, suffix)
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(255);
    /// assert_eq!(builder.name("tag", "main"), "test-tag-ff-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{:x}-{}", prefix, self.seed, suffix)
    }

    pub fn email(&self, suffix: &str) -> String {
        format!("buyer-{:x}-{}@example.com", self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Unwrap an optional value, panicking with `context` when it is None
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert `items` is sorted ascending by `key`
    pub fn assert_sorted_by_key<T, K: Ord + std::fmt::Debug>(
        items: &[T],
        key: impl Fn(&T) -> K,
        context: &str,
    ) {
        let keys: Vec<K> = items.iter().map(key).collect();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "{}: expected ascending order, got {:?}",
            context,
            keys
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.id("order", "a"), builder2.id("order", "a"));
        assert_eq!(builder1.email("x"), builder2.email("x"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_assert_sorted_by_key() {
        assertions::assert_sorted_by_key(&["a", "b", "b", "c"], |s| *s, "letters");
    }

    #[test]
    #[should_panic(expected = "expected ascending order")]
    fn test_assert_sorted_by_key_panics() {
        assertions::assert_sorted_by_key(&[2, 1], |n| *n, "numbers");
    }
}
