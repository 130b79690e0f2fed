//! # View Derivation
//!
//! Pure functions that turn the product list plus the user's search,
//! filter and page selection into what the screen shows.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  full product list ──┬──► summarize()            ──► summary cards     │
//! │                      ├──► status_breakdown()     ──► status pie chart  │
//! │                      ├──► aggregate_by_category() ─► category charts   │
//! │                      │                                                  │
//! │                      └──► filter_products(term, status)                 │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                           paginate(page, size) ──► product table        │
//! │                           total_pages / page_links ──► pager            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Summaries and charts always use the full list; only the table is
//! filtered and paged. None of these functions touch page state: clamping
//! the current page after a delete is the caller's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, StatusFilter, StockStatus};

// =============================================================================
// Classification & Filtering
// =============================================================================

/// Classifies a quantity into its stock bucket.
///
/// ## Example
/// ```rust
/// use stockroom_core::view::classify_stock;
/// use stockroom_core::StockStatus;
///
/// assert_eq!(classify_stock(0), StockStatus::OutOfStock);
/// assert_eq!(classify_stock(3), StockStatus::LowStock);
/// assert_eq!(classify_stock(25), StockStatus::InStock);
/// ```
#[inline]
pub fn classify_stock(quantity: i64) -> StockStatus {
    StockStatus::from_quantity(quantity)
}

/// Case-insensitive substring match on code or name.
///
/// An empty term matches every product.
pub fn matches_search(product: &Product, search_term: &str) -> bool {
    contains_lowercase(product, &search_term.to_lowercase())
}

/// `needle` must already be lowercase.
fn contains_lowercase(product: &Product, needle: &str) -> bool {
    product.code.to_lowercase().contains(needle) || product.name.to_lowercase().contains(needle)
}

/// Applies the search box and status dropdown to the product list.
///
/// A product passes when its code or name contains `search_term`
/// (ignoring case) **and** its stock status passes `status_filter`.
/// Order is preserved.
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::types::{NewProduct, Product, StatusFilter};
/// use stockroom_core::view::filter_products;
///
/// let products = vec![
///     Product::from_new(1, NewProduct::new("PR-001", "Laptop Pro", "Electronics", 15, Money::from_major(1299))),
///     Product::from_new(2, NewProduct::new("PR-002", "Wireless Mouse", "Electronics", 5, Money::from_major(45))),
/// ];
///
/// let hits = filter_products(&products, "MOUSE", StatusFilter::All);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 2);
/// ```
pub fn filter_products(
    products: &[Product],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| status_filter.matches(p.stock_status()) && contains_lowercase(p, &needle))
        .cloned()
        .collect()
}

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `count` items: `ceil(count / page_size)`.
///
/// Zero items means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Returns page `page` (1-based) of `items`.
///
/// Out-of-range pages (including page 0) yield an empty slice; the
/// function never adjusts the page itself.
///
/// ## Example
/// ```rust
/// use stockroom_core::view::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// assert_eq!(paginate(&items, 1, 10).len(), 10);
/// assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
/// assert!(paginate(&items, 4, 10).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// 1-based inclusive range of the rows on a page, for "Showing 11–20 of 25".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Computes the visible row range, or `None` when the page is empty.
pub fn page_window(count: usize, page: usize, page_size: usize) -> Option<PageWindow> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let first = (page - 1).checked_mul(page_size)?;
    if first >= count {
        return None;
    }
    Some(PageWindow {
        start: first + 1,
        end: first.saturating_add(page_size).min(count),
        total: count,
    })
}

/// One control in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
#[ts(export)]
pub enum PageLink {
    /// A clickable page number.
    Page(usize),
    /// A gap ("…") standing in for skipped pages.
    Ellipsis,
}

/// Builds the pager sequence for `total` pages with `current` active.
///
/// The first two and last two pages are always shown, plus the neighbours
/// of the current page. Page 3 turns into an ellipsis once the current page
/// is past 4, and page `total - 2` does when the current page is before
/// `total - 3`. A single page (or none) gets no pager at all.
///
/// ## Example
/// ```rust
/// use stockroom_core::view::{page_links, PageLink::*};
///
/// assert_eq!(
///     page_links(6, 10),
///     vec![Page(1), Page(2), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(9), Page(10)]
/// );
/// ```
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }

    let mut links = Vec::new();
    for page in 1..=total {
        let near_current = page + 1 >= current && page <= current + 1;
        if page <= 2 || page + 2 > total || near_current {
            links.push(PageLink::Page(page));
        } else if page == 3 && current > 4 {
            links.push(PageLink::Ellipsis);
        } else if page + 2 == total && current + 3 < total {
            links.push(PageLink::Ellipsis);
        }
    }
    links
}

// =============================================================================
// Summaries
// =============================================================================

/// Dashboard totals over the full product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventorySummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Σ quantity × unit price, exact to the cent.
    pub total_value: Money,
}

/// Counts products per stock bucket and totals their value.
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::types::{NewProduct, Product};
/// use stockroom_core::view::summarize;
///
/// let p = |id, q, price| Product::from_new(id, NewProduct::new("C", "N", "Other", q, Money::from_major(price)));
/// let summary = summarize(&[p(1, 15, 10), p(2, 0, 5), p(3, 3, 20)]);
///
/// assert_eq!((summary.in_stock, summary.low_stock, summary.out_of_stock), (1, 1, 1));
/// assert_eq!(summary.total_value, Money::from_major(210));
/// ```
pub fn summarize(products: &[Product]) -> InventorySummary {
    products
        .iter()
        .fold(InventorySummary::default(), |mut summary, product| {
            summary.total += 1;
            match product.stock_status() {
                StockStatus::InStock => summary.in_stock += 1,
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::OutOfStock => summary.out_of_stock += 1,
            }
            summary.total_value += product.inventory_value();
            summary
        })
}

/// Product count for one stock bucket (a pie-chart slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCount {
    pub status: StockStatus,
    pub count: usize,
}

/// Product counts per stock bucket, always all three, in display order.
pub fn status_breakdown(products: &[Product]) -> Vec<StatusCount> {
    let summary = summarize(products);
    vec![
        StatusCount {
            status: StockStatus::InStock,
            count: summary.in_stock,
        },
        StatusCount {
            status: StockStatus::LowStock,
            count: summary.low_stock,
        },
        StatusCount {
            status: StockStatus::OutOfStock,
            count: summary.out_of_stock,
        },
    ]
}

// =============================================================================
// Category Aggregates
// =============================================================================

/// Units on hand in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryQuantity {
    pub category: String,
    pub quantity: i64,
}

/// Inventory value of one category, rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryValue {
    pub category: String,
    pub value: i64,
}

/// Per-category chart data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryAggregates {
    pub quantity_by_category: Vec<CategoryQuantity>,
    pub value_by_category: Vec<CategoryValue>,
}

/// Totals quantity and value per category.
///
/// Categories appear in the order they are first seen in `products`.
/// Values are summed exactly, then rounded once per category. Totals that
/// leave the i64 range clamp at its bounds.
pub fn aggregate_by_category(products: &[Product]) -> CategoryAggregates {
    let mut totals: Vec<(&str, i64, Money)> = Vec::new();

    for product in products {
        let category = product.category.as_str();
        match totals.iter_mut().find(|(name, _, _)| *name == category) {
            Some((_, quantity, value)) => {
                *quantity = quantity.saturating_add(product.quantity);
                *value += product.inventory_value();
            }
            None => totals.push((category, product.quantity, product.inventory_value())),
        }
    }

    CategoryAggregates {
        quantity_by_category: totals
            .iter()
            .map(|(category, quantity, _)| CategoryQuantity {
                category: category.to_string(),
                quantity: *quantity,
            })
            .collect(),
        value_by_category: totals
            .iter()
            .map(|(category, _, value)| CategoryValue {
                category: category.to_string(),
                value: value.round_to_major(),
            })
            .collect(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewProduct;
    use crate::PAGE_SIZE;

    fn product(id: i64, code: &str, name: &str, category: &str, qty: i64, cents: i64) -> Product {
        Product::from_new(
            id,
            NewProduct::new(code, name, category, qty, Money::from_cents(cents)),
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "PR-001", "Laptop Pro", "Electronics", 15, 129_900),
            product(2, "PR-002", "Wireless Mouse", "Electronics", 5, 4_500),
            product(3, "PR-003", "Office Chair", "Furniture", 0, 29_900),
            product(4, "PR-004", "Printer Ink", "Supplies", 25, 8_900),
            product(5, "PR-005", "Desk Lamp", "Furniture", 8, 7_500),
        ]
    }

    fn numbered(count: i64) -> Vec<Product> {
        (1..=count)
            .map(|i| product(i, &format!("GEN-{i:03}"), "Item", "Other", i, 100))
            .collect()
    }

    #[test]
    fn test_classify_stock_every_small_quantity() {
        assert_eq!(classify_stock(0), StockStatus::OutOfStock);
        for q in 1..10 {
            assert_eq!(classify_stock(q), StockStatus::LowStock, "quantity {q}");
        }
        for q in [10, 11, 99, 1_000_000] {
            assert_eq!(classify_stock(q), StockStatus::InStock, "quantity {q}");
        }
    }

    #[test]
    fn test_no_op_filter_is_identity() {
        let products = catalog();
        assert_eq!(filter_products(&products, "", StatusFilter::All), products);
    }

    #[test]
    fn test_search_is_case_insensitive_on_code_and_name() {
        let products = catalog();

        let by_name = filter_products(&products, "lApToP", StatusFilter::All);
        assert_eq!(by_name.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

        let by_code = filter_products(&products, "pr-00", StatusFilter::All);
        assert_eq!(by_code.len(), 5);

        assert!(filter_products(&products, "stapler", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_search_does_not_look_at_category() {
        let products = catalog();
        assert!(filter_products(&products, "furniture", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_combines_with_search() {
        let products = catalog();

        let low = filter_products(&products, "", StatusFilter::LowStock);
        assert_eq!(low.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 5]);

        let low_lamps = filter_products(&products, "lamp", StatusFilter::LowStock);
        assert_eq!(low_lamps.iter().map(|p| p.id).collect::<Vec<_>>(), vec![5]);

        assert!(filter_products(&products, "lamp", StatusFilter::InStock).is_empty());

        let out = filter_products(&products, "", StatusFilter::OutOfStock);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_pagination_of_25_items() {
        let items = numbered(25);

        assert_eq!(total_pages(items.len(), PAGE_SIZE), 3);
        assert_eq!(paginate(&items, 1, PAGE_SIZE).len(), 10);
        assert_eq!(paginate(&items, 2, PAGE_SIZE)[0].id, 11);
        assert_eq!(paginate(&items, 3, PAGE_SIZE).len(), 5);
        assert!(paginate(&items, 4, PAGE_SIZE).is_empty());
        assert!(paginate(&items, 0, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_total_pages_edges() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(
            page_window(25, 3, 10),
            Some(PageWindow {
                start: 21,
                end: 25,
                total: 25
            })
        );
        assert_eq!(page_window(25, 4, 10), None);
        assert_eq!(page_window(0, 1, 10), None);
    }

    #[test]
    fn test_page_links_small() {
        use PageLink::*;
        assert!(page_links(1, 1).is_empty());
        assert!(page_links(1, 0).is_empty());
        assert_eq!(page_links(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_links(2, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn test_page_links_ellipses() {
        use PageLink::*;
        assert_eq!(
            page_links(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            page_links(10, 10),
            vec![Page(1), Page(2), Ellipsis, Page(9), Page(10)]
        );
        // Page 3 is a neighbour of 4, so no left gap yet.
        assert_eq!(
            page_links(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_summary_scenario() {
        let products = vec![
            product(1, "A", "A", "Other", 15, 1_000),
            product(2, "B", "B", "Other", 0, 500),
            product(3, "C", "C", "Other", 3, 2_000),
        ];
        let summary = summarize(&products);

        assert_eq!(
            summary,
            InventorySummary {
                total: 3,
                in_stock: 1,
                low_stock: 1,
                out_of_stock: 1,
                total_value: Money::from_major(210),
            }
        );
    }

    #[test]
    fn test_summary_value_is_exact_and_ignores_filters() {
        let products = vec![
            product(1, "A", "A", "Other", 3, 1_999),
            product(2, "B", "B", "Other", 2, 10),
        ];
        assert_eq!(summarize(&products).total_value.cents(), 6_017);
        assert_eq!(summarize(&[]), InventorySummary::default());
    }

    #[test]
    fn test_huge_stock_values_clamp_instead_of_overflowing() {
        // 10^17 units at 1000.00 is far past i64 cents
        let products = vec![
            product(1, "BIG-1", "Pallet", "Supplies", 100_000_000_000_000_000, 100_000),
            product(2, "BIG-2", "Crate", "Supplies", i64::MAX, 1),
            product(3, "PR-004", "Printer Ink", "Supplies", 25, 8_900),
        ];

        let summary = summarize(&products);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.in_stock, 3);
        assert_eq!(summary.total_value, Money::MAX);

        let aggregates = aggregate_by_category(&products);
        assert_eq!(aggregates.quantity_by_category[0].quantity, i64::MAX);
        assert_eq!(
            aggregates.value_by_category[0].value,
            Money::MAX.round_to_major()
        );
    }

    #[test]
    fn test_status_breakdown_order() {
        let breakdown = status_breakdown(&catalog());
        let pairs: Vec<_> = breakdown.iter().map(|s| (s.status, s.count)).collect();
        assert_eq!(
            pairs,
            vec![
                (StockStatus::InStock, 2),
                (StockStatus::LowStock, 2),
                (StockStatus::OutOfStock, 1),
            ]
        );
    }

    #[test]
    fn test_category_aggregates() {
        let aggregates = aggregate_by_category(&catalog());

        assert_eq!(
            aggregates.quantity_by_category,
            vec![
                CategoryQuantity {
                    category: "Electronics".into(),
                    quantity: 20
                },
                CategoryQuantity {
                    category: "Furniture".into(),
                    quantity: 8
                },
                CategoryQuantity {
                    category: "Supplies".into(),
                    quantity: 25
                },
            ]
        );
        let values: Vec<_> = aggregates
            .value_by_category
            .iter()
            .map(|v| (v.category.as_str(), v.value))
            .collect();
        assert_eq!(
            values,
            vec![("Electronics", 19_710), ("Furniture", 600), ("Supplies", 2_225)]
        );
    }

    #[test]
    fn test_category_value_rounds_after_summing() {
        let products = vec![
            product(1, "A", "A", "Other", 1, 40),
            product(2, "B", "B", "Other", 1, 40),
        ];
        // 0.40 + 0.40 = 0.80 → 1 (rounding each first would give 0)
        assert_eq!(aggregate_by_category(&products).value_by_category[0].value, 1);
    }
}
