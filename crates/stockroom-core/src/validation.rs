//! # Validation Module
//!
//! Form-level validation for product create/edit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Product form (THIS MODULE)                                   │
//! │  ├── Raw text → typed values (quantity, unit price)                    │
//! │  ├── Required text fields, sign checks, category list                  │
//! │  └── Every failing field reported at once                              │
//! │           │                                                             │
//! │           ▼  only valid NewProduct values pass                          │
//! │  Layer 2: Product Store                                                │
//! │  └── Accepts whatever it is given (no checks)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::ProductForm;
//!
//! let form = ProductForm {
//!     code: "PR-010".into(),
//!     name: "Standing Desk".into(),
//!     category: "Furniture".into(),
//!     quantity: "004".into(),
//!     unit_price: "349.99".into(),
//! };
//!
//! let fields = form.parse().unwrap();
//! assert_eq!(fields.quantity, 4);
//! assert_eq!(fields.unit_price.cents(), 34_999);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationErrors};
use crate::money::{Money, ParseMoneyError};
use crate::types::{NewProduct, Product};
use crate::CATEGORIES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product code: must not be blank.
pub fn validate_code(code: &str) -> ValidationResult<()> {
    require_text("code", code)
}

/// Validates a product name: must not be blank.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    require_text("name", name)
}

/// Validates a category against [`CATEGORIES`].
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_category;
///
/// assert!(validate_category("Supplies").is_ok());
/// assert!(validate_category("Groceries").is_err());
/// ```
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if CATEGORIES.contains(&category) {
        return Ok(());
    }
    Err(ValidationError::NotAllowed {
        field: "category".to_string(),
        allowed: CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}

/// Validates a quantity: zero is allowed, negatives are not.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a unit price: must be strictly positive.
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "unitPrice".to_string(),
        });
    }
    Ok(())
}

/// Runs every field rule and collects all failures.
pub fn validate_product_fields(fields: &NewProduct) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let checks = [
        validate_code(&fields.code),
        validate_name(&fields.name),
        validate_category(&fields.category),
        validate_quantity(fields.quantity),
        validate_unit_price(fields.unit_price),
    ];
    for err in checks.into_iter().filter_map(Result::err) {
        errors.push(err);
    }

    errors.into_result()
}

// =============================================================================
// Input Parsing
// =============================================================================

/// Reads the quantity input box.
///
/// An empty box reads as zero and leading zeros are ignored ("007" → 7).
/// Fractions and non-numeric text are rejected.
pub fn parse_quantity_input(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })
}

/// Reads the unit price input box.
///
/// An empty box reads as zero (which then fails [`validate_unit_price`]).
pub fn parse_price_input(input: &str) -> ValidationResult<Money> {
    match input.parse::<Money>() {
        Ok(price) => Ok(price),
        Err(ParseMoneyError::Empty) => Ok(Money::zero()),
        Err(err) => Err(ValidationError::InvalidFormat {
            field: "unitPrice".to_string(),
            reason: err.to_string(),
        }),
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw contents of the add/edit product form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub code: String,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
}

impl Default for ProductForm {
    /// A blank "Add Product" form.
    fn default() -> Self {
        ProductForm {
            code: String::new(),
            name: String::new(),
            category: CATEGORIES[0].to_string(),
            quantity: "0".to_string(),
            unit_price: "0".to_string(),
        }
    }
}

impl ProductForm {
    /// Prefills the form for editing an existing product.
    pub fn for_product(product: &Product) -> Self {
        let price = product.unit_price;
        let sign = if price.is_negative() { "-" } else { "" };
        ProductForm {
            code: product.code.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity.to_string(),
            unit_price: format!("{}{}.{:02}", sign, price.dollars().abs(), price.cents_part()),
        }
    }

    /// Parses and validates every field.
    ///
    /// Text fields are passed through untrimmed; only blankness is checked.
    pub fn parse(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let quantity = parse_quantity_input(&self.quantity)
            .map_err(|e| errors.push(e))
            .ok();
        let unit_price = parse_price_input(&self.unit_price)
            .map_err(|e| errors.push(e))
            .ok();

        let (Some(quantity), Some(unit_price)) = (quantity, unit_price) else {
            // Report the parse failures along with any blank text fields.
            for err in [
                validate_code(&self.code),
                validate_name(&self.name),
                validate_category(&self.category),
            ]
            .into_iter()
            .filter_map(Result::err)
            {
                errors.push(err);
            }
            return Err(errors);
        };

        let fields = NewProduct {
            code: self.code.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            quantity,
            unit_price,
        };
        validate_product_fields(&fields)?;
        Ok(fields)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
