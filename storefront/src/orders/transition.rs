//! Order status transitions
//!
//! Vendors change an order's status by picking it from a list. Whether every
//! pick is allowed depends on the [`TransitionPolicy`].

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::OrderStatus;
use std::fmt;
use std::str::FromStr;

/// Which status changes are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may be set from any status
    #[default]
    Permissive,
    /// Lifecycle order only; cancellation allowed until delivery
    ForwardOnly,
}

impl TransitionPolicy {
    /// Statuses reachable from `from` in one step (excluding `from` itself)
    pub fn next_statuses(&self, from: OrderStatus) -> Vec<OrderStatus> {
        match self {
            TransitionPolicy::Permissive => OrderStatus::ALL
                .into_iter()
                .filter(|status| *status != from)
                .collect(),
            TransitionPolicy::ForwardOnly => forward_successors(from).to_vec(),
        }
    }

    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        from == to || self.next_statuses(from).contains(&to)
    }

    /// `Ok` when allowed, `OrderInvalidTransition` otherwise
    pub fn check(&self, order_id: &str, from: OrderStatus, to: OrderStatus) -> AppResult<()> {
        if self.allows(from, to) {
            return Ok(());
        }
        Err(AppError::with_message(
            ErrorCode::OrderInvalidTransition,
            format!("Order {} cannot move from {} to {}", order_id, from, to),
        )
        .with_detail("order_id", order_id)
        .with_detail("from", from.as_str())
        .with_detail("to", to.as_str()))
    }
}

fn forward_successors(from: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match from {
        Pending => &[Confirmed, Cancelled],
        Confirmed => &[Preparing, Cancelled],
        Preparing => &[Ready, Cancelled],
        Ready => &[Delivered, Cancelled],
        Delivered | Cancelled => &[],
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionPolicy::Permissive => f.write_str("permissive"),
            TransitionPolicy::ForwardOnly => f.write_str("forward_only"),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "forward_only" | "forward-only" => Ok(TransitionPolicy::ForwardOnly),
            other => Err(format!("unknown status policy '{}'", other)),
        }
    }
}
