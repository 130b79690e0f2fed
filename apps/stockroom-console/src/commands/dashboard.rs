//! # Dashboard Commands
//!
//! Summary cards and chart data. Always computed over the full product
//! list, whatever the table's search, filter or page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐  │
//! │  │ Products │ │ In Stock │ │   Low    │ │   Out    │ │ Total Value  │  │
//! │  │    5     │ │    2     │ │    2     │ │    1     │ │  $22,535.00  │  │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────────────┘  │
//! │                                                                         │
//! │  Status pie        Quantity by category       Value by category         │
//! │  (status_breakdown) (quantity_by_category)    (value_by_category)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::commands::product::loaded_products;
use crate::error::ApiError;
use crate::state::SessionState;
use stockroom_core::view::{self, CategoryAggregates, InventorySummary, StatusCount};

/// Everything above and below the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub summary: InventorySummary,
    pub status_breakdown: Vec<StatusCount>,
    pub categories: CategoryAggregates,
}

/// Computes the dashboard from the loaded products.
pub fn dashboard(session: &SessionState) -> Result<DashboardDto, ApiError> {
    debug!("dashboard command");
    session.with_session(|s| {
        let products = loaded_products(s)?;
        Ok(DashboardDto {
            summary: view::summarize(products),
            status_breakdown: view::status_breakdown(products),
            categories: view::aggregate_by_category(products),
        })
    })
}
