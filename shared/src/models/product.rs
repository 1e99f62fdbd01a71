//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity (read-only catalog record)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price in currency unit
    pub price: f64,
    /// Category reference
    pub category_id: String,
    /// Sub-category reference, when the category is subdivided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<String>,
    /// Units on hand (vendor inventory)
    #[serde(default)]
    pub stock: u32,
    /// Average customer rating, 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
