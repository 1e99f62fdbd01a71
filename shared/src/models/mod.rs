//! Data models
//!
//! Record shapes shared by the seed data and every collaborator that feeds the
//! storefront. Field names serialize in camelCase.

pub mod category;
pub mod order;
pub mod product;

// Re-exports
pub use category::*;
pub use order::*;
pub use product::*;
