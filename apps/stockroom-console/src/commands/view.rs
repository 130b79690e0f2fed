//! # View Commands
//!
//! Search box, status dropdown and pager.
//!
//! Changing the search text or the status filter always returns to page 1.
//! Page requests outside `1..=total_pages` are ignored and the current page
//! is returned unchanged.

use tracing::debug;

use crate::commands::product::{build_page, ProductPage};
use crate::error::ApiError;
use crate::state::{ConsoleConfig, SessionState};
use stockroom_core::StatusFilter;

/// Sets the search text.
pub fn set_search(
    session: &SessionState,
    config: &ConsoleConfig,
    term: &str,
) -> Result<ProductPage, ApiError> {
    debug!(term = %term, "set_search command");
    session.with_session_mut(|s| {
        s.view.set_search(term);
        build_page(s, config.page_size)
    })
}

/// Sets the status filter.
pub fn set_status_filter(
    session: &SessionState,
    config: &ConsoleConfig,
    filter: StatusFilter,
) -> Result<ProductPage, ApiError> {
    debug!(filter = %filter, "set_status_filter command");
    session.with_session_mut(|s| {
        s.view.set_status_filter(filter);
        build_page(s, config.page_size)
    })
}

/// Moves to another page of the filtered table.
pub fn go_to_page(
    session: &SessionState,
    config: &ConsoleConfig,
    page: usize,
) -> Result<ProductPage, ApiError> {
    debug!(page, "go_to_page command");
    session.with_session_mut(|s| {
        let current = build_page(s, config.page_size)?;
        if !s.view.go_to_page(page, current.total_pages) {
            return Ok(current);
        }
        build_page(s, config.page_size)
    })
}
