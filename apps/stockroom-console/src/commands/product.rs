//! # Product Commands
//!
//! Commands for loading, paging and editing products.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Save Flow                                    │
//! │                                                                         │
//! │  User submits the Add/Edit dialog                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductForm::parse() ── invalid ──► ApiError(VALIDATION_ERROR, fields) │
//! │       │ valid                         (store never called)              │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Editing an existing product?             │                         │
//! │  │  YES: merge over loaded record, keep code │──► store.update()       │
//! │  │  NO:  store.create()                      │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Reload the list from the store (failure is logged, not returned)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return the saved ProductDto                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::state::{
    ConsoleConfig, InventoryState, Session, SessionState, StoreState, LOAD_FAILED_MESSAGE,
};
use stockroom_core::validation::ProductForm;
use stockroom_core::view::{self, PageLink, PageWindow};
use stockroom_core::{CoreError, Money, Product, StatusFilter, StockStatus};

// =============================================================================
// DTOs
// =============================================================================

/// Product DTO (Data Transfer Object) for the front-end.
///
/// Carries the derived stock status so the table can badge each row
/// without re-classifying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub status: StockStatus,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            code: p.code.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            quantity: p.quantity,
            unit_price: p.unit_price,
            status: p.stock_status(),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto::from(&p)
    }
}

/// Everything the "view product" dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsDto {
    #[serde(flatten)]
    pub product: ProductDto,
    /// quantity × unit price
    pub inventory_value: Money,
}

/// One page of the product table plus the pager around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub rows: Vec<ProductDto>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Products matching the search and filter, across all pages.
    pub filtered_count: usize,
    pub window: Option<PageWindow>,
    pub links: Vec<PageLink>,
    pub search_term: String,
    pub status_filter: StatusFilter,
}

/// Result of a delete: the echoed id and the (possibly clamped) page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: i64,
    pub page: ProductPage,
}

// =============================================================================
// Helpers
// =============================================================================

/// The loaded list, or the reason there is none.
pub(crate) fn loaded_products(session: &Session) -> Result<&[Product], ApiError> {
    match &session.inventory {
        InventoryState::Ready(products) => Ok(products.as_slice()),
        InventoryState::Loading => Err(ApiError::unavailable("Products are still loading")),
        InventoryState::Failed(message) => Err(ApiError::unavailable(message.clone())),
    }
}

/// Number of pages the current search and filter produce.
fn filtered_total_pages(session: &Session, page_size: usize) -> Result<usize, ApiError> {
    let products = loaded_products(session)?;
    let filtered =
        view::filter_products(products, &session.view.search_term, session.view.status_filter);
    Ok(view::total_pages(filtered.len(), page_size))
}

/// Derives the visible page from the session.
pub(crate) fn build_page(session: &Session, page_size: usize) -> Result<ProductPage, ApiError> {
    let products = loaded_products(session)?;
    let state = &session.view;

    let filtered = view::filter_products(products, &state.search_term, state.status_filter);
    let total_pages = view::total_pages(filtered.len(), page_size);
    let rows = view::paginate(&filtered, state.current_page, page_size)
        .iter()
        .map(ProductDto::from)
        .collect();

    Ok(ProductPage {
        rows,
        current_page: state.current_page,
        total_pages,
        filtered_count: filtered.len(),
        window: view::page_window(filtered.len(), state.current_page, page_size),
        links: view::page_links(state.current_page, total_pages),
        search_term: state.search_term.clone(),
        status_filter: state.status_filter,
    })
}

/// Re-reads the list from the store into the session.
async fn refresh(store: &StoreState, session: &SessionState) -> Result<usize, ApiError> {
    match store.inner().products().list().await {
        Ok(products) => {
            let count = products.len();
            session.with_session_mut(|s| s.inventory = InventoryState::Ready(products));
            Ok(count)
        }
        Err(err) => {
            error!(error = %err, "Reloading products failed");
            session.with_session_mut(|s| {
                s.inventory = InventoryState::Failed(LOAD_FAILED_MESSAGE.to_string())
            });
            Err(ApiError::from(err))
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Loads the product list from the store.
///
/// The session is `Loading` while the store answers, then `Ready` or
/// `Failed("Failed to load products")`.
///
/// ## Returns
/// Number of products loaded
pub async fn load_products(store: &StoreState, session: &SessionState) -> Result<usize, ApiError> {
    let start = Instant::now();
    debug!("load_products command");

    session.with_session_mut(|s| s.inventory = InventoryState::Loading);

    let count = refresh(store, session)
        .await
        .map_err(|e| ApiError::new(e.code, LOAD_FAILED_MESSAGE))?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count,
        "load_products complete"
    );
    Ok(count)
}

/// Returns the current page of the filtered product table.
pub fn product_page(session: &SessionState, config: &ConsoleConfig) -> Result<ProductPage, ApiError> {
    debug!("product_page command");
    session.with_session(|s| build_page(s, config.page_size))
}

/// Gets one loaded product with its inventory value.
///
/// ## Returns
/// The product if loaded, or ApiError::NotFound
pub fn product_details(session: &SessionState, id: i64) -> Result<ProductDetailsDto, ApiError> {
    debug!(id, "product_details command");
    session.with_session(|s| {
        let product = loaded_products(s)?
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;
        Ok(ProductDetailsDto {
            product: ProductDto::from(product),
            inventory_value: product.inventory_value(),
        })
    })
}

/// Creates or updates a product from the submitted form.
///
/// ## Arguments
/// * `form` - Raw form contents
/// * `editing` - Id of the product being edited, `None` when adding
///
/// ## Returns
/// The saved product. Invalid forms fail with `VALIDATION_ERROR` and the
/// store is not called. Once the store has accepted the write this always
/// succeeds; a failed reload leaves the session `Failed` and is only logged.
pub async fn save_product(
    store: &StoreState,
    session: &SessionState,
    form: &ProductForm,
    editing: Option<i64>,
) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(?editing, code = %form.code, "save_product command");

    let fields = form.parse()?;

    let saved = match editing {
        Some(id) => {
            let existing = session.with_session(|s| {
                loaded_products(s)?
                    .iter()
                    .find(|p| p.id == id)
                    .cloned()
                    .ok_or_else(|| ApiError::from(CoreError::ProductNotFound(id)))
            })?;
            store.inner().products().update(existing.with_edits(fields)).await?
        }
        None => store.inner().products().create(fields).await?,
    };

    if let Err(err) = refresh(store, session).await {
        warn!(id = saved.id, error = %err, "Product saved but the list could not be reloaded");
    }

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = saved.id,
        created = editing.is_none(),
        "save_product complete"
    );
    Ok(ProductDto::from(saved))
}

/// Deletes a product, reloads, and keeps the current page valid.
///
/// When the delete empties the last page, the session moves back one page.
pub async fn delete_product(
    store: &StoreState,
    session: &SessionState,
    config: &ConsoleConfig,
    id: i64,
) -> Result<DeleteResponse, ApiError> {
    let start = Instant::now();
    debug!(id, "delete_product command");

    let deleted_id = store.inner().products().delete(id).await?;
    refresh(store, session).await?;

    let page = session.with_session_mut(|s| {
        let total_pages = filtered_total_pages(s, config.page_size)?;
        s.view.clamp_page(total_pages);
        build_page(s, config.page_size)
    })?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = deleted_id,
        current_page = page.current_page,
        "delete_product complete"
    );
    Ok(DeleteResponse { deleted_id, page })
}
