//! # Sample Data
//!
//! The five demo products the store starts with, plus a generator for
//! larger lists when exercising pagination.
//!
//! ## Generated Products
//! Products are spread across every category the form offers. Each one has:
//! - Unique code: `GEN-{INDEX:04}`
//! - A name built from a base item and a variant
//! - Price: $4.99 - $499.99 depending on the item
//! - Quantity: 0 - 40, so all three stock buckets appear

use stockroom_core::{Money, NewProduct, CATEGORIES};
use tracing::debug;

/// Base items per category, with a base price in cents.
const ITEMS: &[(&str, &[(&str, i64)])] = &[
    (
        "Electronics",
        &[
            ("Monitor", 18_900),
            ("Keyboard", 4_900),
            ("Headset", 7_900),
            ("Webcam", 5_900),
            ("USB Hub", 2_499),
        ],
    ),
    (
        "Furniture",
        &[
            ("Desk", 34_900),
            ("Bookshelf", 12_900),
            ("Filing Cabinet", 15_900),
            ("Stool", 4_500),
        ],
    ),
    (
        "Supplies",
        &[
            ("Paper Ream", 899),
            ("Sticky Notes", 499),
            ("Toner", 6_900),
            ("Binder", 599),
        ],
    ),
    (
        "Office Equipment",
        &[
            ("Shredder", 11_900),
            ("Label Maker", 3_900),
            ("Laminator", 4_999),
        ],
    ),
    ("Other", &[("Plant", 1_999), ("Wall Clock", 2_499)]),
];

/// Variants appended to item names, with a price addon in cents.
const VARIANTS: &[(&str, i64)] = &[
    ("Basic", 0),
    ("Plus", 1_000),
    ("Pro", 3_500),
    ("Compact", 500),
    ("XL", 2_000),
];

/// The five demo products, in display order.
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("PR-001", "Laptop Pro", "Electronics", 15, Money::from_major(1299)),
        NewProduct::new("PR-002", "Wireless Mouse", "Electronics", 5, Money::from_major(45)),
        NewProduct::new("PR-003", "Office Chair", "Furniture", 0, Money::from_major(299)),
        NewProduct::new("PR-004", "Printer Ink", "Supplies", 25, Money::from_major(89)),
        NewProduct::new("PR-005", "Desk Lamp", "Furniture", 8, Money::from_major(75)),
    ]
}

/// Generates `count` deterministic products.
///
/// ## Example
/// ```rust
/// use stockroom_store::sample::generate_products;
///
/// let products = generate_products(25);
/// assert_eq!(products.len(), 25);
/// assert_eq!(products[0].code, "GEN-0001");
/// ```
pub fn generate_products(count: usize) -> Vec<NewProduct> {
    let products: Vec<NewProduct> = (0..count).map(generate_product).collect();
    debug!(count = products.len(), "Generated products");
    products
}

/// Generates a single product from its index.
fn generate_product(seed: usize) -> NewProduct {
    let (category, items) = ITEMS[seed % ITEMS.len()];
    let (item, base_cents) = items[(seed / ITEMS.len()) % items.len()];
    let (variant, addon_cents) = VARIANTS[(seed * 7) % VARIANTS.len()];

    // 0..=40 spreads products over every stock bucket
    let quantity = ((seed * 13) % 41) as i64;

    debug_assert!(CATEGORIES.contains(&category));

    NewProduct::new(
        format!("GEN-{:04}", seed + 1),
        format!("{item} {variant}"),
        category,
        quantity,
        Money::from_cents(base_cents + addon_cents),
    )
}
