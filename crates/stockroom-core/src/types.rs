//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  StockStatus    │   │  StatusFilter   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  In Stock  ≥10  │   │  All            │       │
//! │  │  code (business)│   │  Low Stock 1-9  │   │  In Stock       │       │
//! │  │  name, category │   │  Out of Stock 0 │   │  Low Stock      │       │
//! │  │  quantity       │   └─────────────────┘   │  Out of Stock   │       │
//! │  │  unit_price     │                          └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: integer assigned by the store on creation, immutable
//! - `code`: business identifier ("PR-001"), fixed once created by the form
//!
//! Neither uniqueness of `code` nor the sign of `quantity`/`unit_price` is
//! enforced here; those are form rules (see [`crate::validation`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Stock Status
// =============================================================================

/// Availability bucket derived from a product's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StockStatus {
    /// Ten or more units.
    #[serde(rename = "In Stock")]
    InStock,
    /// One to nine units.
    #[serde(rename = "Low Stock")]
    LowStock,
    /// No units left.
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Every status, in display order.
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    /// Classifies a quantity.
    ///
    /// Anything at or below zero counts as out of stock, so a negative
    /// quantity (which the store does not reject) still lands in a bucket.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::StockStatus;
    ///
    /// assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::from_quantity(9), StockStatus::LowStock);
    /// assert_eq!(StockStatus::from_quantity(10), StockStatus::InStock);
    /// ```
    pub const fn from_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Human-readable label ("In Stock", "Low Stock", "Out of Stock").
    pub const fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = ValidationError;

    /// Accepts the display label or a kebab/snake-case spelling,
    /// case-insensitively ("Low Stock", "low-stock", "LOW_STOCK").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "instock" => Ok(StockStatus::InStock),
            "lowstock" => Ok(StockStatus::LowStock),
            "outofstock" => Ok(StockStatus::OutOfStock),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: StockStatus::ALL.iter().map(|s| s.label().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Status Filter
// =============================================================================

/// The status selection of the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StatusFilter {
    /// Returns true if a product with `status` passes this filter.
    pub const fn matches(&self, status: StockStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::InStock => matches!(status, StockStatus::InStock),
            StatusFilter::LowStock => matches!(status, StockStatus::LowStock),
            StatusFilter::OutOfStock => matches!(status, StockStatus::OutOfStock),
        }
    }

    /// Label shown in the filter dropdown.
    pub const fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::InStock => StockStatus::InStock.label(),
            StatusFilter::LowStock => StockStatus::LowStock.label(),
            StatusFilter::OutOfStock => StockStatus::OutOfStock.label(),
        }
    }
}

impl From<StockStatus> for StatusFilter {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::InStock => StatusFilter::InStock,
            StockStatus::LowStock => StatusFilter::LowStock,
            StockStatus::OutOfStock => StatusFilter::OutOfStock,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<StockStatus>()
            .map(StatusFilter::from)
            .map_err(|_| ValidationError::NotAllowed {
                field: "statusFilter".to_string(),
                allowed: ["All", "In Stock", "Low Stock", "Out of Stock"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// Product fields supplied on create (everything except `id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl NewProduct {
    /// Convenience constructor.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        NewProduct {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit_price,
        }
    }
}

/// An inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Business identifier, e.g. "PR-001".
    pub code: String,

    /// Display name.
    pub name: String,

    /// Category label (see [`crate::CATEGORIES`]).
    pub category: String,

    /// Units on hand.
    pub quantity: i64,

    /// Price per unit.
    pub unit_price: Money,
}

impl Product {
    /// Builds a stored record from create fields and an assigned id.
    pub fn from_new(id: i64, fields: NewProduct) -> Self {
        Product {
            id,
            code: fields.code,
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            unit_price: fields.unit_price,
        }
    }

    /// The stock bucket for this product's quantity.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// Value on hand: quantity × unit price.
    #[inline]
    pub fn inventory_value(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Applies edited form fields over this record.
    ///
    /// `id` and `code` are kept: the edit form does not allow changing them.
    pub fn with_edits(&self, edits: NewProduct) -> Product {
        Product {
            id: self.id,
            code: self.code.clone(),
            name: edits.name,
            category: edits.category,
            quantity: edits.quantity,
            unit_price: edits.unit_price,
        }
    }

    /// Returns the create fields of this record (used to prefill the edit form).
    pub fn to_fields(&self) -> NewProduct {
        NewProduct {
            code: self.code.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::from_new(
            5,
            NewProduct::new("PR-005", "Desk Lamp", "Furniture", 8, Money::from_major(75)),
        )
    }

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(9), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(10), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(10_000), StockStatus::InStock);
    }

    #[test]
    fn test_negative_quantity_is_out_of_stock() {
        assert_eq!(StockStatus::from_quantity(-3), StockStatus::OutOfStock);
    }

    #[test]
    fn test_stock_status_parsing() {
        assert_eq!("In Stock".parse::<StockStatus>().unwrap(), StockStatus::InStock);
        assert_eq!("low-stock".parse::<StockStatus>().unwrap(), StockStatus::LowStock);
        assert_eq!("OUT_OF_STOCK".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
        assert!("plenty".parse::<StockStatus>().is_err());
    }

    #[test]
    fn test_status_filter_parsing_and_default() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("Low Stock".parse::<StatusFilter>().unwrap(), StatusFilter::LowStock);

        let err = "sometimes".parse::<StatusFilter>().unwrap_err();
        assert_eq!(err.field(), "statusFilter");
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(StockStatus::OutOfStock));
        assert!(StatusFilter::LowStock.matches(StockStatus::LowStock));
        assert!(!StatusFilter::LowStock.matches(StockStatus::InStock));
    }

    #[test]
    fn test_inventory_value() {
        assert_eq!(lamp().inventory_value(), Money::from_major(600));
    }

    #[test]
    fn test_with_edits_keeps_id_and_code() {
        let edited = lamp().with_edits(NewProduct::new(
            "HACKED",
            "Desk Lamp XL",
            "Other",
            12,
            Money::from_major(80),
        ));
        assert_eq!(edited.id, 5);
        assert_eq!(edited.code, "PR-005");
        assert_eq!(edited.name, "Desk Lamp XL");
        assert_eq!(edited.quantity, 12);
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(lamp()).unwrap();
        assert_eq!(json["unitPrice"], 7500);
        assert_eq!(json["code"], "PR-005");

        let status = serde_json::to_value(lamp().stock_status()).unwrap();
        assert_eq!(status, "Low Stock");
    }
}
