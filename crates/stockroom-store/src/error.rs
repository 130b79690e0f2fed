//! # Store Error Types
//!
//! Error types for product store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ProductRepository operation                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds entity and id context                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in console app) ← Serialized for the front-end              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Front-end shows "Failed to load products" or similar                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Product store errors.
///
/// The in-memory store only fails in two ways, but every operation returns
/// [`StoreResult`] so a real backend can add failures without changing
/// call signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - `update` with an id that is not in the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The store cannot serve requests.
    ///
    /// ## When This Occurs
    /// - Any operation after [`Store::close`](crate::Store::close)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates an Unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable(reason.into())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("Product", 42).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            StoreError::unavailable("closed").to_string(),
            "Store unavailable: closed"
        );
    }
}
