//! Order list logic
//!
//! - [`filter`]: status tab + search box, date-descending order
//! - [`stats`]: dashboard aggregates
//! - [`money`]: decimal-precise totals and load-time validation
//! - [`transition`]: which status changes are accepted
//! - [`store`]: the in-memory state container behind the order screens

pub mod filter;
pub mod money;
pub mod stats;
pub mod store;
pub mod transition;

// Re-exports
pub use filter::{SearchQuery, StatusFilter, filter, filter_orders};
pub use stats::DashboardStats;
pub use store::OrderStore;
pub use transition::TransitionPolicy;
