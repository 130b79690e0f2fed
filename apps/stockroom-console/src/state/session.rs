//! # Session State
//!
//! What the user is looking at: the loaded product list and the current
//! search, filter and page.
//!
//! ## Why Arc<Mutex>?
//! The session is shared by every command, and most commands both read it
//! and write it back after awaiting the store. Locks are taken in short
//! closures and never held across an `.await`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryState lifecycle                                               │
//! │                                                                         │
//! │   Loading ──list() ok──► Ready(products) ──mutation──► Ready(products') │
//! │      │                                                                  │
//! │      └───list() err───► Failed("Failed to load products")               │
//! │                                                                         │
//! │  ViewState                                                              │
//! │   set_search / set_status_filter ──► current_page = 1                   │
//! │   go_to_page(p)                   ──► accepted only when 1 ≤ p ≤ total  │
//! │   clamp_page(total) after delete  ──► current_page ≤ max(total, 1)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use stockroom_core::{Product, StatusFilter};
use tracing::debug;

/// Message shown when the initial product load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

// =============================================================================
// Inventory
// =============================================================================

/// Load state of the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InventoryState {
    /// A load is in flight (skeleton rows in a UI).
    #[default]
    Loading,
    /// The list as last read from the store.
    Ready(Vec<Product>),
    /// Loading failed; holds the user-facing message.
    Failed(String),
}

impl InventoryState {
    /// The loaded products, if any.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            InventoryState::Ready(products) => Some(products.as_slice()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, InventoryState::Loading)
    }
}

// =============================================================================
// View
// =============================================================================

/// Search, status filter and page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub status_filter: StatusFilter,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            current_page: 1,
        }
    }
}

impl ViewState {
    /// Sets the search text and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Sets the status filter and returns to the first page.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.current_page = 1;
    }

    /// Moves to `page` if it exists; returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            debug!(page, total_pages, "Ignoring out-of-range page");
            return false;
        }
        self.current_page = page;
        true
    }

    /// Pulls the current page back inside `1..=total_pages`.
    ///
    /// Used after a delete empties the last page. Returns whether the page
    /// changed.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        if self.current_page > total_pages && self.current_page > 1 {
            let clamped = total_pages.max(1);
            debug!(from = self.current_page, to = clamped, "Clamping current page");
            self.current_page = clamped;
            return true;
        }
        false
    }
}

// =============================================================================
// Session
// =============================================================================

/// Everything one user session holds.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub inventory: InventoryState,
    pub view: ViewState,
}

/// Thread-safe session wrapper.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates an empty session in the `Loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
