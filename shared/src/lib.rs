//! Shared types for the marketplace
//!
//! Domain records (orders, catalog) and the unified error system used by the
//! storefront crate and by any collaborator that supplies seed data.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Category, Order, OrderItem, OrderStatus, Product, SubCategory};
