//! Collaborator interfaces
//!
//! The screens compose against these traits only. Every implementation in
//! this crate is backed by seed data; a networked client would implement the
//! same traits without the screens noticing.

pub mod auth;
pub mod catalog_service;
pub mod order_service;

pub use auth::{AuthService, Credentials, MockAuthService, Route, Session, resolve_start_route};
pub use catalog_service::{CatalogService, SeedCatalogService};
pub use order_service::{OrderService, SeedOrderService};
