// conch-console/tests/console_flow.rs
// 集成测试：控制台与 mock 目录服务的完整操作流

use conch_api_mock::AppState;
use conch_client::{ClientConfig, ClientError};
use conch_console::catalog::{EditField, EditSession};
use conch_console::{CatalogConsole, ConsoleError, ConsoleEvent, GuardState, NoticeLevel};
use shared::Product;
use std::net::SocketAddr;
use std::sync::Arc;

const SELLER: &str = "seller-001";

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            product_id: "100001".to_string(),
            name: "Canvas Tote Bag".to_string(),
            category: "Bags".to_string(),
            price: 19.5,
            in_stock_value: 40,
            sold_stock_value: 12,
            rating: 4.2,
            ..Default::default()
        },
        Product {
            product_id: "100002".to_string(),
            name: "Wool Beanie".to_string(),
            category: "Hats".to_string(),
            price: 12.0,
            in_stock_value: 25,
            sold_stock_value: 3,
            rating: 4.8,
            ..Default::default()
        },
        Product {
            product_id: "100003".to_string(),
            name: "Steel Tumbler".to_string(),
            category: "Drinkware".to_string(),
            price: 24.0,
            in_stock_value: 10,
            sold_stock_value: 8,
            rating: 3.9,
            ..Default::default()
        },
    ]
}

async fn start_mock(products: Vec<Product>) -> (SocketAddr, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    state.add_seller(SELLER).await;
    state.set_products(products).await;

    let (addr, _handle) = conch_api_mock::spawn(state.clone()).await.unwrap();
    (addr, state)
}

fn console_for(addr: SocketAddr, seller_id: Option<&str>) -> CatalogConsole {
    let client = ClientConfig::new(format!("http://{}", addr)).build_client();
    CatalogConsole::with_client(client, seller_id.map(str::to_string))
}

#[tokio::test]
async fn test_verified_seller_loads_catalog() {
    let (addr, _state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));

    let state = console.start().await.unwrap();
    assert_eq!(state, GuardState::Verified);
    assert_eq!(console.table().products().len(), 3);
    assert!(console.drain_events().is_empty());
}

#[tokio::test]
async fn test_unverified_seller_is_redirected() {
    let (addr, _state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some("seller-999"));

    let state = console.start().await.unwrap();
    assert_eq!(state, GuardState::Denied);
    assert_eq!(console.table().products().len(), 0);
    assert_eq!(console.drain_events(), vec![ConsoleEvent::RedirectToLogin]);

    // catalog access stays blocked after the denial
    let err = console.load().await.unwrap_err();
    assert!(matches!(err, ConsoleError::NotVerified));
}

#[tokio::test]
async fn test_missing_seller_id_denies_without_network() {
    // nothing listens on this address; a network attempt would error out
    let client = ClientConfig::new("http://127.0.0.1:9").build_client();
    let mut console = CatalogConsole::with_client(client, None);

    let state = console.verify().await.unwrap();
    assert_eq!(state, GuardState::Denied);
    assert_eq!(console.drain_events(), vec![ConsoleEvent::RedirectToLogin]);
}

#[tokio::test]
async fn test_save_success_refetches_and_clears_edit_slot() {
    let (addr, state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    console.start_edit("100003");
    console.edit_field(EditField::Name, "Steel Tumbler XL");
    console.edit_field(EditField::Price, "27.5");

    // a row added server-side becomes visible only because save re-fetches
    state
        .products
        .write()
        .await
        .push(Product {
            product_id: "100009".to_string(),
            name: "Enamel Mug".to_string(),
            ..Default::default()
        });

    console.save_edit().await.unwrap();

    assert!(!console.table().edit.is_editing());
    assert_eq!(console.table().products().len(), 4);

    let tumbler = console.table().product("100003").unwrap();
    assert_eq!(tumbler.name, "Steel Tumbler XL");
    assert_eq!(tumbler.price, 27.5);
}

#[tokio::test]
async fn test_save_failure_keeps_editing_and_table() {
    let (addr, state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    console.start_edit("100002");
    console.edit_field(EditField::Name, "Alpaca Beanie");

    // the row disappears server-side, so the update will answer 404
    state
        .products
        .write()
        .await
        .retain(|p| p.product_id != "100002");

    let before = console.table().products().to_vec();
    let err = console.save_edit().await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Client(ClientError::NotFound(_))
    ));

    // still editing the same row, typed input intact, table untouched
    assert_eq!(console.table().edit.editing_id(), Some("100002"));
    let EditSession::Editing { buffer, .. } = &console.table().edit else {
        panic!("expected editing state");
    };
    assert_eq!(buffer.name, "Alpaca Beanie");
    assert_eq!(console.table().products(), before.as_slice());
}

#[tokio::test]
async fn test_delete_success_removes_locally_without_refetch() {
    let (addr, state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    // added server-side after the load; delete must not re-fetch, so it
    // stays invisible locally
    state
        .products
        .write()
        .await
        .push(Product {
            product_id: "100010".to_string(),
            name: "Sticker Pack".to_string(),
            ..Default::default()
        });

    console.delete("100001").await.unwrap();

    assert_eq!(console.table().products().len(), 2);
    assert!(console.table().product("100001").is_none());
    assert!(console.table().product("100010").is_none());

    let events = console.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], ConsoleEvent::Notice(n) if n.level == NoticeLevel::Info));

    // the row really is gone server-side
    assert!(
        !state
            .products
            .read()
            .await
            .iter()
            .any(|p| p.product_id == "100001")
    );
}

#[tokio::test]
async fn test_delete_rejection_surfaces_notice_and_keeps_table() {
    let (addr, _state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    // a rejection is an Ok outcome with an error notice
    console.delete("999999").await.unwrap();

    assert_eq!(console.table().products().len(), 3);

    let events = console.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], ConsoleEvent::Notice(n) if n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn test_create_flow_clears_draft_and_requests_reload() {
    let (addr, state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.jpg");
    std::fs::write(&first, b"first image").unwrap();
    std::fs::write(&second, b"second image").unwrap();

    {
        let draft = console.draft_mut();
        draft.open_dialog();
        draft.generate_id();
        draft.name = "Linen Scarf".to_string();
        draft.category = "Accessories".to_string();
        draft.price = "15.5".to_string();
        draft.in_stock_value = "20".to_string();
        draft.set_images(vec![first, second]);
    }
    let draft_id = console.draft().product_id.clone();

    console.submit_draft().await.unwrap();

    // draft cleared, dialog closed, reload queued
    assert!(console.draft().product_id.is_empty());
    assert!(!console.draft().dialog_open);
    assert_eq!(console.drain_events(), vec![ConsoleEvent::ReloadRequested]);

    // the server received the product with both images joined in
    // selection order
    let products = state.products.read().await;
    let created = products.iter().find(|p| p.product_id == draft_id).unwrap();
    assert_eq!(created.name, "Linen Scarf");
    assert_eq!(created.price, 15.5);
    assert_eq!(created.in_stock_value, 20);

    let segments: Vec<&str> = created.img.split(' ').collect();
    assert_eq!(segments.len(), 2);
    assert!(segments[0].starts_with("data:image/png;base64,"));
    assert!(segments[1].starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn test_ingest_failure_keeps_draft_and_dialog_open() {
    let (addr, state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    {
        let draft = console.draft_mut();
        draft.open_dialog();
        draft.generate_id();
        draft.name = "Ghost Product".to_string();
        draft.set_images(vec![std::path::PathBuf::from("/no/such/file.png")]);
    }

    let err = console.submit_draft().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Ingest(_)));

    // draft untouched, dialog still open, nothing was sent
    assert_eq!(console.draft().name, "Ghost Product");
    assert!(console.draft().dialog_open);
    assert!(console.drain_events().is_empty());
    assert_eq!(state.products.read().await.len(), 3);
}

#[tokio::test]
async fn test_shutdown_cancels_network_calls() {
    let (addr, _state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    console.shutdown();

    let err = console.load().await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Client(ClientError::Cancelled)
    ));
}

#[tokio::test]
async fn test_logout_redirects_and_ends_session() {
    let (addr, _state) = start_mock(sample_products()).await;
    let mut console = console_for(addr, Some(SELLER));
    console.start().await.unwrap();

    console.logout().await.unwrap();
    assert_eq!(console.drain_events(), vec![ConsoleEvent::RedirectToLogin]);

    // the session ended server-side: a fresh console is denied
    let mut second = console_for(addr, Some(SELLER));
    let state = second.start().await.unwrap();
    assert_eq!(state, GuardState::Denied);
}
