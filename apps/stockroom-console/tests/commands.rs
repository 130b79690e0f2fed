//! End-to-end command tests against an instant store.

use stockroom_console::cli::Args;
use stockroom_console::commands::{dashboard, product, view};
use stockroom_console::error::ErrorCode;
use stockroom_console::state::{
    ConsoleConfig, InventoryState, SessionState, StoreState, LOAD_FAILED_MESSAGE,
};
use stockroom_core::validation::ProductForm;
use stockroom_core::view::PageLink;
use stockroom_core::{Money, StatusFilter, StockStatus};
use stockroom_store::{sample, Store, StoreConfig};
use std::time::Duration;

fn sample_store() -> StoreState {
    StoreState::new(Store::new(StoreConfig::instant().seed_sample_data(true)))
}

fn generated_store(count: usize) -> StoreState {
    StoreState::from_config(StoreConfig::instant(), Some(count))
}

async fn loaded(store: &StoreState) -> SessionState {
    let session = SessionState::new();
    product::load_products(store, &session).await.unwrap();
    session
}

fn form(code: &str, name: &str, quantity: &str, price: &str) -> ProductForm {
    ProductForm {
        code: code.to_string(),
        name: name.to_string(),
        category: "Office Equipment".to_string(),
        quantity: quantity.to_string(),
        unit_price: price.to_string(),
    }
}

#[tokio::test]
async fn test_load_products_moves_to_ready() {
    let store = sample_store();
    let session = SessionState::new();
    assert!(session.with_session(|s| s.inventory.is_loading()));

    let count = product::load_products(&store, &session).await.unwrap();
    assert_eq!(count, 5);
    assert_eq!(
        session.with_session(|s| s.inventory.products().map(<[_]>::len)),
        Some(5)
    );
}

#[tokio::test]
async fn test_failed_load_reports_message() {
    let store = sample_store();
    store.inner().close();
    let session = SessionState::new();

    let err = product::load_products(&store, &session).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StoreUnavailable);
    assert_eq!(err.message, LOAD_FAILED_MESSAGE);
    assert_eq!(
        session.with_session(|s| s.inventory.clone()),
        InventoryState::Failed(LOAD_FAILED_MESSAGE.to_string())
    );

    let page_err = product::product_page(&session, &ConsoleConfig::default()).unwrap_err();
    assert_eq!(page_err.message, LOAD_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_first_page_of_samples() {
    let store = sample_store();
    let session = loaded(&store).await;

    let page = product::product_page(&session, &ConsoleConfig::default()).unwrap();
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.total_pages, 1);
    assert!(page.links.is_empty());
    assert_eq!(page.rows[2].status, StockStatus::OutOfStock);
}

#[tokio::test]
async fn test_search_and_filter() {
    let store = sample_store();
    let session = loaded(&store).await;
    let config = ConsoleConfig::default();

    let page = view::set_search(&session, &config, "DESK").unwrap();
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].code, "PR-005");

    let page = view::set_search(&session, &config, "").unwrap();
    assert_eq!(page.filtered_count, 5);

    let page = view::set_status_filter(&session, &config, StatusFilter::LowStock).unwrap();
    let codes: Vec<&str> = page.rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["PR-002", "PR-005"]);
}

#[tokio::test]
async fn test_paging_through_generated_products() {
    let store = generated_store(25);
    let session = loaded(&store).await;
    let config = ConsoleConfig::default();

    let page = product::product_page(&session, &config).unwrap();
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.total_pages, 3);
    assert_eq!(
        page.links,
        vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
    );

    let page = view::go_to_page(&session, &config, 3).unwrap();
    assert_eq!(page.current_page, 3);
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.window.map(|w| (w.start, w.end)), Some((21, 25)));

    // Out of range: stays on page 3.
    let page = view::go_to_page(&session, &config, 4).unwrap();
    assert_eq!(page.current_page, 3);
}

#[tokio::test]
async fn test_filter_change_resets_page() {
    let store = generated_store(25);
    let session = loaded(&store).await;
    let config = ConsoleConfig::default();

    view::go_to_page(&session, &config, 2).unwrap();
    let page = view::set_search(&session, &config, "gen").unwrap();
    assert_eq!(page.current_page, 1);
}

#[tokio::test]
async fn test_create_product() {
    let store = sample_store();
    let session = loaded(&store).await;

    let saved = product::save_product(
        &store,
        &session,
        &form("PR-006", "Monitor Arm", "012", "59.9"),
        None,
    )
    .await
    .unwrap();

    assert_eq!(saved.id, 6);
    assert_eq!(saved.quantity, 12);
    assert_eq!(saved.unit_price, Money::from_cents(5990));
    assert_eq!(store.inner().products().count().await.unwrap(), 6);

    let details = product::product_details(&session, 6).unwrap();
    assert_eq!(details.inventory_value, Money::from_cents(71_880));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_store() {
    let store = sample_store();
    let session = loaded(&store).await;

    let err = product::save_product(&store, &session, &form("", "Thing", "-1", "0"), None)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationError);
    assert!(err.field("code").is_some());
    assert!(err.field("quantity").is_some());
    assert!(err.field("unitPrice").is_some());
    assert_eq!(store.inner().products().count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_edit_keeps_id_and_code() {
    let store = sample_store();
    let session = loaded(&store).await;

    let mut edit = form("IGNORED", "Desk Lamp LED", "30", "80");
    edit.category = "Furniture".to_string();
    let saved = product::save_product(&store, &session, &edit, Some(5))
        .await
        .unwrap();

    assert_eq!(saved.id, 5);
    assert_eq!(saved.code, "PR-005");
    assert_eq!(saved.name, "Desk Lamp LED");
    assert_eq!(saved.status, StockStatus::InStock);

    let stored = store.inner().products().get(5).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 30);
    assert_eq!(store.inner().products().count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_edit_of_unknown_product_is_not_found() {
    let store = sample_store();
    let session = loaded(&store).await;

    let err = product::save_product(&store, &session, &form("X", "Y", "1", "1"), Some(77))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_save_reports_success_when_only_the_reload_fails() {
    let store = StoreState::new(Store::new(StoreConfig::default()));
    let session = loaded(&store).await;

    // The create lands at 600ms; the store closes before the reload at 1200ms.
    let new_form = form("PR-006", "Monitor Arm", "12", "59.90");
    let (saved, ()) = tokio::join!(
        product::save_product(&store, &session, &new_form, None),
        async {
            tokio::time::sleep(Duration::from_millis(900)).await;
            store.inner().close();
        }
    );

    let saved = saved.unwrap();
    assert_eq!(saved.id, 6);
    assert_eq!(saved.code, "PR-006");
    assert_eq!(
        session.with_session(|s| s.inventory.clone()),
        InventoryState::Failed(LOAD_FAILED_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_huge_stock_value_does_not_break_the_dashboard() {
    let store = sample_store();
    let session = loaded(&store).await;
    let config = ConsoleConfig::default();

    let saved = product::save_product(
        &store,
        &session,
        &form("BIG-1", "Bulk Paper", "100000000000000000", "1000.00"),
        None,
    )
    .await
    .unwrap();

    let details = product::product_details(&session, saved.id).unwrap();
    assert_eq!(details.inventory_value, Money::MAX);

    let dashboard = dashboard::dashboard(&session).unwrap();
    assert_eq!(dashboard.summary.total, 6);
    assert_eq!(dashboard.summary.total_value, Money::MAX);

    let output = stockroom_console::execute(&store, &session, &config, &Args::default())
        .await
        .unwrap();
    assert!(output.contains("BIG-1"));
}

#[tokio::test]
async fn test_delete_last_item_on_last_page_clamps() {
    let store = generated_store(11);
    let session = loaded(&store).await;
    let config = ConsoleConfig::default();

    let page = view::go_to_page(&session, &config, 2).unwrap();
    assert_eq!(page.rows.len(), 1);
    let last_id = page.rows[0].id;

    let response = product::delete_product(&store, &session, &config, last_id)
        .await
        .unwrap();

    assert_eq!(response.deleted_id, last_id);
    assert_eq!(response.page.current_page, 1);
    assert_eq!(response.page.total_pages, 1);
    assert_eq!(response.page.rows.len(), 10);
}

#[tokio::test]
async fn test_delete_unknown_id_is_harmless() {
    let store = sample_store();
    let session = loaded(&store).await;

    let response = product::delete_product(&store, &session, &ConsoleConfig::default(), 404)
        .await
        .unwrap();
    assert_eq!(response.deleted_id, 404);
    assert_eq!(response.page.filtered_count, 5);
}

#[tokio::test]
async fn test_dashboard_ignores_filters() {
    let store = sample_store();
    let session = loaded(&store).await;
    view::set_search(&session, &ConsoleConfig::default(), "lamp").unwrap();

    let dashboard = dashboard::dashboard(&session).unwrap();
    assert_eq!(dashboard.summary.total, 5);
    assert_eq!(dashboard.summary.in_stock, 2);
    assert_eq!(dashboard.summary.low_stock, 2);
    assert_eq!(dashboard.summary.out_of_stock, 1);
    assert_eq!(dashboard.summary.total_value, Money::from_major(22_535));

    let values: Vec<(&str, i64)> = dashboard
        .categories
        .value_by_category
        .iter()
        .map(|v| (v.category.as_str(), v.value))
        .collect();
    assert_eq!(
        values,
        vec![("Electronics", 19_710), ("Furniture", 600), ("Supplies", 2_225)]
    );
}

#[tokio::test]
async fn test_execute_json_output() {
    let store = sample_store();
    let session = SessionState::new();
    let args = Args {
        search: Some("pr-00".to_string()),
        status: StatusFilter::OutOfStock,
        json: true,
        ..Args::default()
    };

    let output = stockroom_console::execute(&store, &session, &ConsoleConfig::default(), &args)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["dashboard"]["summary"]["total"], 5);
    assert_eq!(json["page"]["rows"][0]["code"], "PR-003");
    assert_eq!(json["page"]["statusFilter"], "Out of Stock");
}

#[tokio::test]
async fn test_execute_text_output() {
    let store = StoreState::new(Store::with_products(
        StoreConfig::instant(),
        sample::generate_products(30),
    ));
    let session = SessionState::new();
    let args = Args {
        page: 2,
        ..Args::default()
    };

    let output = stockroom_console::execute(&store, &session, &ConsoleConfig::default(), &args)
        .await
        .unwrap();

    assert!(output.contains("Inventory Summary"));
    assert!(output.contains("Showing 11-20 of 30"));
    assert!(output.contains("Pages: 1 [2] 3"));
}
