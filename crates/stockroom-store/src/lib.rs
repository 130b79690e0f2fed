//! # stockroom-store: Product Store for Stockroom
//!
//! This crate owns the authoritative product list and exposes it through
//! async CRUD operations that each wait out a simulated network delay.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Console command (load_products, save_product, ...)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repository   │    │   Sample     │  │   │
//! │  │   │  (store.rs)   │    │ (product.rs)  │    │  (sample.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ StoreConfig   │    │ list/create   │    │ PR-001..005  │  │   │
//! │  │   │ shared list   │◄───│ update/delete │    │ generated N  │  │   │
//! │  │   │ lifecycle     │    │ latency       │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> in process memory (gone when the Store is dropped)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store lifecycle and configuration
//! - [`error`] - Store error types
//! - [`repository`] - Product CRUD operations
//! - [`sample`] - Sample and generated product data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::from_env());
//!
//! let products = store.products().list().await?;
//! let created = store.products().create(fields).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod sample;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

pub use repository::product::ProductRepository;
