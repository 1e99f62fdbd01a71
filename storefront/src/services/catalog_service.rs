//! Catalog collaborator

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Category, Product, SubCategory};
use std::sync::Arc;

use crate::catalog::Catalog;

/// Read-only catalog access
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn categories(&self) -> AppResult<Vec<Category>>;

    async fn sub_categories(&self, category_id: &str) -> AppResult<Vec<SubCategory>>;

    async fn products(&self) -> AppResult<Vec<Product>>;
}

/// [`CatalogService`] over an in-memory [`Catalog`]
#[derive(Clone)]
pub struct SeedCatalogService {
    catalog: Arc<Catalog>,
}

impl SeedCatalogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl CatalogService for SeedCatalogService {
    async fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.catalog.categories.clone())
    }

    async fn sub_categories(&self, category_id: &str) -> AppResult<Vec<SubCategory>> {
        Ok(self
            .catalog
            .subcategories_of(category_id)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn products(&self) -> AppResult<Vec<Product>> {
        Ok(self.catalog.products.clone())
    }
}
