//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the inventory
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (web or console)                   │   │
//! │  │   Summary Cards ──► Search/Filter ──► Table ──► Charts          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   view    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  filter   │  │   form    │  │   │
//! │  │   │  Status   │  │  totals   │  │  paginate │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE ACCESS • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-store (Product Store)                 │   │
//! │  │              list / create / update / delete                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, StockStatus, StatusFilter)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`view`] - Filtering, pagination, summaries and category totals
//! - [`error`] - Domain error types
//! - [`validation`] - Form-level validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::money::Money;
//! use stockroom_core::types::{NewProduct, Product};
//! use stockroom_core::view::summarize;
//!
//! let products = vec![
//!     Product::from_new(1, NewProduct::new("PR-001", "Laptop", "Electronics", 15, Money::from_major(10))),
//!     Product::from_new(2, NewProduct::new("PR-002", "Chair", "Furniture", 0, Money::from_major(5))),
//! ];
//!
//! let summary = summarize(&products);
//! assert_eq!(summary.total, 2);
//! assert_eq!(summary.total_value, Money::from_major(150));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError, ValidationErrors};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows per page in the product table.
pub const PAGE_SIZE: usize = 10;

/// Quantities below this (and above zero) are "Low Stock".
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Category labels offered by the product form.
///
/// The first entry is the form's default. The store itself accepts any label.
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Furniture",
    "Supplies",
    "Office Equipment",
    "Other",
];
