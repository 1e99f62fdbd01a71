use std::sync::Arc;
use storefront::seed;
use storefront::services::{CatalogService, SeedCatalogService};

#[tokio::test]
async fn seed_catalog_serves_categories_and_subcategories() {
    let service = SeedCatalogService::new(Arc::new(seed::seed_catalog().unwrap()));

    let categories = service.categories().await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alimentation", "Boissons", "Hygiène & Maison"]);

    let subs = service.sub_categories("boissons").await.unwrap();
    assert_eq!(subs.len(), 2);
    assert!(subs.iter().all(|s| s.category_id == "boissons"));

    assert!(service.sub_categories("inconnue").await.unwrap().is_empty());
    assert_eq!(service.products().await.unwrap().len(), 6);
}

#[test]
fn shopping_and_inventory_queries() {
    let catalog = seed::seed_catalog().unwrap();

    let epicerie: Vec<&str> = catalog
        .products_in("alimentation", Some("epicerie"))
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(epicerie, vec!["prod-huile-1l", "prod-sucre-1kg"]);

    let found: Vec<&str> = catalog
        .search_products("riz")
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(found, vec!["prod-riz-5kg"]);

    let restock: Vec<&str> = catalog
        .low_stock(5)
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(restock, vec!["prod-cafe-touba", "prod-huile-1l", "prod-savon"]);

    assert!(!catalog.product("prod-cafe-touba").unwrap().in_stock());
    assert_eq!(catalog.category("hygiene").unwrap().name, "Hygiène & Maison");
}
