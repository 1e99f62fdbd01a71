use std::sync::Arc;

use anyhow::Context;
use storefront::orders::OrderStore;
use storefront::presentation::{BadgeDisplay, OrderHistoryEntry, StatusStyle, badge, format_currency};
use storefront::services::{
    AuthService, Credentials, MockAuthService, OrderService, Route, SeedCatalogService,
    SeedOrderService, resolve_start_route,
};
use storefront::{DashboardStats, seed, setup_environment};

/// Stock level at or under which a product shows on the restock list
const LOW_STOCK_THRESHOLD: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        policy = %config.status_policy,
        "Storefront starting"
    );

    // 2. 登录 (模拟)
    let auth: Arc<dyn AuthService> = Arc::new(MockAuthService::from_config(&config));
    let credentials = Credentials {
        username: config.demo_user.clone(),
        password: String::new(),
    };
    let session = match resolve_start_route(auth.as_ref(), &credentials).await {
        Route::Home(session) => session,
        Route::Login => {
            println!("Connexion échouée, retour à l'écran de connexion.");
            return Ok(());
        }
    };

    // 3. 加载种子数据
    let orders = seed::seed_orders().context("loading seed orders")?;
    let store = OrderStore::new(orders, config.status_policy).context("building order store")?;
    let order_service = SeedOrderService::new(Arc::new(store));
    let catalog_service = SeedCatalogService::new(Arc::new(
        seed::seed_catalog().context("loading seed catalog")?,
    ));

    // 4. 仪表盘
    let orders = order_service.fetch_orders().await?;
    let stats = DashboardStats::compute(&orders, config.timezone);
    println!("Bonjour {}", session.username);
    println!(
        "Commandes: {} | En attente: {} | Prêtes: {} | Revenu du jour: {}",
        stats.total_orders,
        stats.pending_orders,
        stats.ready_orders,
        format_currency(stats.today_revenue, &config.currency_suffix)
    );
    for (status, count) in &stats.status_counts {
        let tab = match badge(*count, false) {
            Some(BadgeDisplay::Count(text)) => format!("{} ({})", StatusStyle::of(*status).label, text),
            Some(BadgeDisplay::Dot) | None => StatusStyle::of(*status).label.to_string(),
        };
        println!("  [{}]", tab);
    }

    // 5. 订单列表 (STATUS_FILTER / SEARCH 可选)
    let display = config.display_options();
    for order in order_service.store().filtered(&config.status_filter, &config.search) {
        let entry = OrderHistoryEntry::from_order(&order, &display);
        println!(
            "{} | {} | {} | {} | {}",
            entry.id, entry.date, entry.customer_name, entry.status_label, entry.total
        );
        for line in &entry.item_lines {
            println!("    {}", line);
        }
        if let Some(caption) = &entry.more_caption {
            println!("    {}", caption);
        }
    }

    // 6. 库存提醒
    for product in catalog_service.catalog().low_stock(LOW_STOCK_THRESHOLD) {
        println!("Stock bas: {} ({})", product.name, product.stock);
    }

    Ok(())
}
