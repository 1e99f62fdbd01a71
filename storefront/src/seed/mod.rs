//! Seed data
//!
//! Hand-written sample orders and catalog, embedded at compile time. A real
//! data source must hand over records in exactly this JSON shape.

use shared::error::{AppError, ErrorCode};
use shared::models::Order;
use thiserror::Error;

use crate::catalog::Catalog;

const ORDERS_JSON: &str = include_str!("orders.json");
const CATALOG_JSON: &str = include_str!("catalog.json");

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed record: {0}")]
    Invalid(#[from] AppError),
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Invalid(inner) => inner,
            SeedError::Parse { file, source } => {
                AppError::with_message(ErrorCode::SeedDataInvalid, source.to_string())
                    .with_detail("file", file)
            }
        }
    }
}

/// Parse orders from a JSON array
pub fn parse_orders(json: &str) -> Result<Vec<Order>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError::Parse {
        file: "orders.json",
        source,
    })
}

/// Parse and validate a catalog document
pub fn parse_catalog(json: &str) -> Result<Catalog, SeedError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|source| SeedError::Parse {
        file: "catalog.json",
        source,
    })?;
    catalog.validate()?;
    Ok(catalog)
}

/// Embedded sample orders
pub fn seed_orders() -> Result<Vec<Order>, SeedError> {
    let orders = parse_orders(ORDERS_JSON)?;
    tracing::debug!(count = orders.len(), "Loaded seed orders");
    Ok(orders)
}

/// Embedded sample catalog
pub fn seed_catalog() -> Result<Catalog, SeedError> {
    let catalog = parse_catalog(CATALOG_JSON)?;
    tracing::debug!(
        categories = catalog.categories.len(),
        products = catalog.products.len(),
        "Loaded seed catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::money::validate_order;
    use shared::models::OrderStatus;

    #[test]
    fn test_seed_orders_are_valid() {
        let orders = seed_orders().unwrap();
        assert_eq!(orders.len(), 6);
        for order in &orders {
            validate_order(order).unwrap();
        }
        // one order per status
        for status in OrderStatus::ALL {
            assert_eq!(orders.iter().filter(|o| o.status == status).count(), 1);
        }
    }

    #[test]
    fn test_only_delivered_seed_has_delivery_date() {
        for order in seed_orders().unwrap() {
            assert_eq!(
                order.delivery_date.is_some(),
                order.status == OrderStatus::Delivered,
                "{}",
                order.id
            );
        }
    }

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.categories.len(), 3);
        assert_eq!(catalog.subcategories_of("alimentation").len(), 2);
    }

    #[test]
    fn test_parse_error_maps_to_seed_code() {
        let err: AppError = parse_orders("[{]").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::SeedDataInvalid);
        assert_eq!(err.details.unwrap().get("file").unwrap(), "orders.json");
    }

    #[test]
    fn test_invalid_catalog_keeps_inner_code() {
        let json = r#"{"categories": [], "products": [
            {"id": "p", "name": "X", "price": 1, "categoryId": "ghost"}
        ]}"#;
        let err: AppError = parse_catalog(json).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }
}
