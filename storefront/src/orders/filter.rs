//! Order list filtering
//!
//! Status tab + search box over an in-memory order list:
//!
//! ```text
//! filter(orders, status_filter, query)
//!     ├─ 1. status:  "all" keeps everything, a status keeps its matches,
//!     │             anything else keeps nothing
//!     ├─ 2. search:  name (case-insensitive) | id (case-insensitive)
//!     │             | phone (case-sensitive substring)
//!     └─ 3. order:   order_date descending, stable on ties
//! ```

use shared::models::{Order, OrderStatus};
use std::fmt;

/// Value of the status tab
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// `"all"`
    #[default]
    All,
    /// One of the six statuses
    Status(OrderStatus),
    /// Anything else; matches no order
    Unknown(String),
}

impl StatusFilter {
    pub const ALL_KEY: &'static str = "all";

    /// Parse the raw tab key; never fails
    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL_KEY {
            return StatusFilter::All;
        }
        match raw.parse::<OrderStatus>() {
            Ok(status) => StatusFilter::Status(status),
            Err(_) => StatusFilter::Unknown(raw.to_string()),
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => order.status == *status,
            StatusFilter::Unknown(_) => false,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Status(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(Self::ALL_KEY),
            StatusFilter::Status(status) => f.write_str(status.as_str()),
            StatusFilter::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Search box content, matched as typed (whitespace included)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// `None` only when the box is empty
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            folded: raw.to_lowercase(),
        })
    }

    pub fn matches(&self, order: &Order) -> bool {
        order.customer_name.to_lowercase().contains(&self.folded)
            || order.id.to_lowercase().contains(&self.folded)
            || order.customer_phone.contains(&self.raw)
    }
}

/// Filter and sort orders for the order list screen
pub fn filter_orders(orders: &[Order], status_filter: &StatusFilter, query: &str) -> Vec<Order> {
    let query = SearchQuery::new(query);

    let mut matched: Vec<Order> = orders
        .iter()
        .filter(|order| status_filter.matches(order))
        .filter(|order| query.as_ref().is_none_or(|q| q.matches(order)))
        .cloned()
        .collect();

    // sort_by is stable: equal dates keep their input order
    matched.sort_by(|a, b| b.order_date.cmp(&a.order_date));

    tracing::debug!(
        status = %status_filter,
        query = query.as_ref().map(|q| q.raw.as_str()).unwrap_or(""),
        total = orders.len(),
        matched = matched.len(),
        "Filtered orders"
    );

    matched
}

/// Convenience wrapper taking the raw tab key
pub fn filter(orders: &[Order], status_filter: &str, query: &str) -> Vec<Order> {
    filter_orders(orders, &StatusFilter::parse(status_filter), query)
}
