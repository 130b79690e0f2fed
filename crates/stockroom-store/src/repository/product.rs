//! # Product Repository
//!
//! CRUD operations over the store's product list.
//!
//! ## Key Operations
//! - Snapshot listing
//! - Create with store-assigned ids
//! - Replace-by-id update
//! - Idempotent delete
//!
//! ## Simulated Latency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Repository Call                                  │
//! │                                                                         │
//! │  caller ──► create(fields)                                             │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │          sleep(latency)          ← ~600ms, lock NOT held                │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │          closed? ──yes──► Err(Unavailable)                              │
//! │                 │ no                                                    │
//! │                 ▼                                                       │
//! │          lock list ─► assign id = max(ids, 0) + 1 ─► push ─► unlock     │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │          Ok(created product)                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Id assignment and insertion happen under one lock, so concurrent
//! creators never receive the same id.

use std::sync::Arc;
use std::time::Duration;

use stockroom_core::{NewProduct, Product};
use tokio::sync::MutexGuard;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::Shared;

/// Repository for product store operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// let all = repo.list().await?;
/// let created = repo.create(fields).await?;
/// repo.delete(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    shared: Arc<Shared>,
    latency: Duration,
}

impl ProductRepository {
    pub(crate) fn new(shared: Arc<Shared>, latency: Duration) -> Self {
        ProductRepository { shared, latency }
    }

    /// Waits out the simulated latency, then locks the list.
    async fn acquire(&self) -> StoreResult<MutexGuard<'_, Vec<Product>>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.shared.is_closed() {
            return Err(StoreError::unavailable("store is closed"));
        }
        Ok(self.shared.products.lock().await)
    }

    /// Returns a copy of every product in insertion order.
    ///
    /// The returned vector is detached: changing it never affects the store.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let products = self.acquire().await?;
        debug!(count = products.len(), "Listing products");
        Ok(products.clone())
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get(&self, id: i64) -> StoreResult<Option<Product>> {
        let products = self.acquire().await?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    /// Number of products in the store.
    pub async fn count(&self) -> StoreResult<usize> {
        Ok(self.acquire().await?.len())
    }

    /// Creates a product, assigning the next id.
    ///
    /// The new id is `max(existing ids, 0) + 1`, so the first product gets
    /// id 1 and ids of deleted products at the end of the list are reused.
    /// No field is validated here.
    pub async fn create(&self, fields: NewProduct) -> StoreResult<Product> {
        let mut products = self.acquire().await?;

        let id = products.iter().map(|p| p.id).max().unwrap_or(0).max(0) + 1;
        let product = Product::from_new(id, fields);

        debug!(id, code = %product.code, "Creating product");
        products.push(product.clone());
        Ok(product)
    }

    /// Replaces the product with the same id, keeping its position.
    ///
    /// ## Errors
    /// `NotFound` when no product has `product.id`; the list is unchanged.
    pub async fn update(&self, product: Product) -> StoreResult<Product> {
        let mut products = self.acquire().await?;

        debug!(id = product.id, "Updating product");
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::not_found("Product", product.id))?;
        *slot = product.clone();
        Ok(product)
    }

    /// Removes the product with this id and echoes the id back.
    ///
    /// Deleting an id that is not present changes nothing and still succeeds.
    pub async fn delete(&self, id: i64) -> StoreResult<i64> {
        let mut products = self.acquire().await?;

        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            warn!(id, "Delete of unknown product ignored");
        } else {
            debug!(id, "Deleted product");
        }
        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
