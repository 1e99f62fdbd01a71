//! Catalog - read-only category / sub-category / product lookups
//!
//! Backs the shopping screens (category tiles, sub-category chips, search)
//! and the vendor inventory screen (low stock list).

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, Product, SubCategory};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
    pub products: Vec<Product>,
}

impl Catalog {
    /// Check references: every sub-category and product points at a known
    /// category, every product sub-category at a known sub-category of that
    /// same category, and prices are finite and non-negative.
    pub fn validate(&self) -> AppResult<()> {
        let category_ids: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();

        for sub in &self.sub_categories {
            if !category_ids.contains(sub.category_id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::CategoryNotFound,
                    format!("Sub-category {} points at unknown category {}", sub.id, sub.category_id),
                )
                .with_detail("sub_category_id", sub.id.as_str()));
            }
        }

        for product in &self.products {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(AppError::with_message(
                    ErrorCode::ProductInvalidPrice,
                    format!("Product {} has price {}", product.id, product.price),
                )
                .with_detail("product_id", product.id.as_str()));
            }
            if !category_ids.contains(product.category_id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::CategoryNotFound,
                    format!(
                        "Product {} points at unknown category {}",
                        product.id, product.category_id
                    ),
                )
                .with_detail("product_id", product.id.as_str()));
            }
            if let Some(sub_id) = &product.sub_category_id {
                let belongs = self
                    .sub_categories
                    .iter()
                    .any(|s| &s.id == sub_id && s.category_id == product.category_id);
                if !belongs {
                    return Err(AppError::with_message(
                        ErrorCode::SubCategoryNotFound,
                        format!(
                            "Product {} points at sub-category {} outside category {}",
                            product.id, sub_id, product.category_id
                        ),
                    )
                    .with_detail("product_id", product.id.as_str()));
                }
            }
        }
        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Sub-categories of a category, in catalog order
    pub fn subcategories_of(&self, category_id: &str) -> Vec<&SubCategory> {
        self.sub_categories
            .iter()
            .filter(|s| s.category_id == category_id)
            .collect()
    }

    /// Products of a category, optionally narrowed to one sub-category
    pub fn products_in(&self, category_id: &str, sub_category_id: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .filter(|p| sub_category_id.is_none_or(|sub| p.sub_category_id.as_deref() == Some(sub)))
            .collect()
    }

    /// Case-insensitive name search; an empty query returns nothing
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Products with `stock <= threshold`, lowest stock first
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        let mut low: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.stock <= threshold)
            .collect();
        low.sort_by_key(|p| p.stock);
        low
    }
}
