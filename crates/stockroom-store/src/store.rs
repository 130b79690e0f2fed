//! # Store Lifecycle
//!
//! Store creation, configuration and shutdown.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Store                                    │
//! │                                                                         │
//! │  Console startup (or a test)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::from_env() ← latency, sample data                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config) ← builds the list, seeds it if asked               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Arc<Shared>                             │                           │
//! │  │  ├── Mutex<Vec<Product>>  (the list)     │                           │
//! │  │  └── AtomicBool           (closed flag)  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ store.products() hands out cheap clones                        │
//! │       ▼                                                                 │
//! │  ProductRepository ──► sleep(latency) ──► lock ──► read/modify          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each `Store` owns its own list. Two stores never share products, so tests
//! can build one per case without leaking state between them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use stockroom_core::{NewProduct, Product};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::repository::product::ProductRepository;
use crate::sample;

// =============================================================================
// Configuration
// =============================================================================

/// Default simulated latency per operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// Product store configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .latency(Duration::from_millis(50))
///     .seed_sample_data(false);
///
/// assert_eq!(config.latency, Duration::from_millis(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Delay applied before every operation resolves.
    /// Default: 600ms
    pub latency: Duration,

    /// Whether to start with the five sample products.
    /// Default: true
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            latency: DEFAULT_LATENCY,
            seed_sample_data: true,
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated latency.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets whether the sample products are loaded.
    pub fn seed_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Zero latency and an empty list (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let store = Store::new(StoreConfig::instant());
    /// // Store is isolated and answers immediately
    /// ```
    pub fn instant() -> Self {
        StoreConfig {
            latency: Duration::ZERO,
            seed_sample_data: false,
        }
    }

    /// Defaults overridden by `STOCKROOM_LATENCY_MS` and `STOCKROOM_SEED`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(ms) = lookup("STOCKROOM_LATENCY_MS") {
            match ms.trim().parse::<u64>() {
                Ok(ms) => {
                    debug!(latency_ms = ms, "Overriding latency from environment");
                    self.latency = Duration::from_millis(ms);
                }
                Err(_) => warn!(value = %ms, "Invalid STOCKROOM_LATENCY_MS, keeping default"),
            }
        }

        if let Some(seed) = lookup("STOCKROOM_SEED") {
            match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_sample_data = true,
                "0" | "false" | "no" => self.seed_sample_data = false,
                _ => warn!(value = %seed, "Invalid STOCKROOM_SEED, keeping default"),
            }
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// State shared by a store and all of its repositories.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) products: Mutex<Vec<Product>>,
    closed: AtomicBool,
}

impl Shared {
    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Main store handle providing repository access.
///
/// Cloning is cheap; clones see the same product list.
///
/// ## Usage in Console Commands
/// ```rust,ignore
/// pub async fn load_products(store: &Store) -> Result<Vec<ProductDto>, ApiError> {
///     let products = store.products().list().await?;
///     Ok(products.iter().map(ProductDto::from).collect())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    shared: Arc<Shared>,
    latency: Duration,
}

impl Store {
    /// Creates a store, seeding the sample products if configured.
    pub fn new(config: StoreConfig) -> Self {
        let initial = if config.seed_sample_data {
            sample::sample_products()
        } else {
            Vec::new()
        };
        Self::build(config.latency, initial)
    }

    /// Creates a store holding `fields`, with ids 1..=n in order.
    ///
    /// Ignores `seed_sample_data`.
    pub fn with_products(config: StoreConfig, fields: Vec<NewProduct>) -> Self {
        Self::build(config.latency, fields)
    }

    fn build(latency: Duration, fields: Vec<NewProduct>) -> Self {
        let products: Vec<Product> = fields
            .into_iter()
            .zip(1..)
            .map(|(fields, id)| Product::from_new(id, fields))
            .collect();

        info!(
            count = products.len(),
            latency_ms = latency.as_millis() as u64,
            "Product store initialized"
        );

        Store {
            shared: Arc::new(Shared {
                products: Mutex::new(products),
                closed: AtomicBool::new(false),
            }),
            latency,
        }
    }

    /// The simulated latency applied to every operation.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = store.products().list().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.shared), self.latency)
    }

    /// Closes the store.
    ///
    /// ## Note
    /// After calling close, every repository operation (including ones on
    /// repositories handed out earlier) fails with `Unavailable`.
    pub fn close(&self) {
        info!("Closing product store");
        self.shared.closed.store(true, Ordering::Release);
    }

    /// Checks if the store is accepting requests.
    pub fn health_check(&self) -> bool {
        !self.shared.is_closed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
