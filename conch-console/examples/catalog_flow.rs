// conch-console/examples/catalog_flow.rs
// 目录操作全流程演示：会话校验、排序过滤、编辑保存、删除、创建、注销
//
// 默认在进程内启动一个 mock 目录服务；设置 CONCH_SERVER_URL 可接真实服务。

use conch_console::catalog::{EditField, SortKey};
use conch_console::{CatalogConsole, ConsoleConfig, ConsoleEvent};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let mut config = ConsoleConfig::from_env();
    conch_console::init_logger_with_file(None, config.log_dir.as_deref());

    // Without a configured server, run an in-process mock
    let mut _mock = None;
    if std::env::var("CONCH_SERVER_URL").is_err() {
        let state = Arc::new(conch_api_mock::AppState::with_seed());
        let (addr, handle) = conch_api_mock::spawn(state).await?;
        tracing::info!("In-process mock catalog on http://{}", addr);
        config.server_url = format!("http://{}", addr);
        _mock = Some(handle);
    }
    if config.seller_id.is_none() {
        config.seller_id = Some("seller-001".to_string());
    }

    let mut console = CatalogConsole::new(&config);
    console.start().await?;
    print_rows("Catalog after login", &console);

    // 排序与过滤
    console.toggle_sort(SortKey::Price);
    console.set_search_query("t");
    print_rows("Sorted by price, filtered to 't'", &console);
    console.set_search_query("");

    // 行内编辑：改价后保存，表格整体重新拉取
    console.start_edit("100003");
    console.edit_field(EditField::Price, "26.5");
    console.save_edit().await?;
    print_rows("After saving a new price on 100003", &console);

    // 删除：成功只移除本地那一行
    console.delete("100002").await?;
    print_rows("After deleting 100002", &console);

    // 创建：草稿 + 两张图片
    let dir = tempfile::tempdir()?;
    let front = dir.path().join("front.png");
    let back = dir.path().join("back.jpg");
    std::fs::write(&front, b"front image bytes")?;
    std::fs::write(&back, b"back image bytes")?;

    let draft = console.draft_mut();
    draft.open_dialog();
    draft.generate_id();
    draft.name = "Linen Scarf".to_string();
    draft.category = "Accessories".to_string();
    draft.price = "15.5".to_string();
    draft.in_stock_value = "20".to_string();
    draft.set_images(vec![front, back]);
    console.submit_draft().await?;

    for event in console.drain_events() {
        match event {
            ConsoleEvent::Notice(notice) => tracing::info!("notice: {}", notice.message),
            ConsoleEvent::ReloadRequested => console.load().await?,
            ConsoleEvent::RedirectToLogin => tracing::warn!("redirected to login"),
        }
    }
    print_rows("After creating the scarf", &console);

    console.logout().await?;
    console.shutdown();

    Ok(())
}

fn print_rows(title: &str, console: &CatalogConsole) {
    println!("\n=== {} ===", title);
    for p in console.visible_rows() {
        println!(
            "{:>8}  {:<24} {:<12} {:>8.2}  in:{:>4}  sold:{:>4}",
            p.product_id, p.name, p.category, p.price, p.in_stock_value, p.sold_stock_value
        );
    }
}
