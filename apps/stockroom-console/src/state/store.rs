//! # Store State
//!
//! Wraps the product [`Store`] for use in console commands.
//!
//! ## Thread Safety
//! `Store` keeps its list behind an async mutex, so commands can share one
//! `StoreState` without extra locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn load_products(store: &StoreState, ...) -> Result<usize, ApiError> {
//!     let products = store.inner().products().list().await?;
//!     ...
//! }
//! ```

use stockroom_store::{sample, Store, StoreConfig};
use tracing::info;

/// Wrapper around `Store` for console state management.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Creates a new StoreState wrapping the store.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Builds the store the binary runs against.
    ///
    /// With `generate = Some(n)` the store holds `n` generated products
    /// instead of the sample set.
    pub fn from_config(config: StoreConfig, generate: Option<usize>) -> Self {
        let store = match generate {
            Some(count) => {
                info!(count, "Using generated products");
                Store::with_products(config, sample::generate_products(count))
            }
            None => Store::new(config),
        };
        StoreState::new(store)
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
