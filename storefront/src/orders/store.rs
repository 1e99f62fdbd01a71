//! OrderStore - in-memory order list for one screen
//!
//! Orders are validated once on load. After that the only mutation is a
//! status change, applied as a single in-place replace (last write wins).

use chrono::NaiveDate;
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus};
use std::collections::HashSet;

use super::filter::{StatusFilter, filter_orders};
use super::money::validate_order;
use super::stats::DashboardStats;
use super::transition::TransitionPolicy;

pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
    policy: TransitionPolicy,
}

impl OrderStore {
    /// Build a store, rejecting invalid orders and duplicate ids
    pub fn new(orders: Vec<Order>, policy: TransitionPolicy) -> AppResult<Self> {
        validate_all(&orders)?;
        tracing::info!(count = orders.len(), policy = %policy, "Order store loaded");
        Ok(Self {
            orders: RwLock::new(orders),
            policy,
        })
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }

    /// Copy of every order in load order
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.orders.read().iter().find(|o| o.id == id).cloned()
    }

    /// Filtered and date-sorted view for the order list
    pub fn filtered(&self, status_filter: &StatusFilter, query: &str) -> Vec<Order> {
        filter_orders(&self.orders.read(), status_filter, query)
    }

    pub fn stats_at(&self, today: NaiveDate, tz: Tz) -> DashboardStats {
        DashboardStats::compute_at(&self.orders.read(), today, tz)
    }

    /// Change one order's status
    ///
    /// Entering `delivered` stamps `delivery_date`; leaving it clears the stamp.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::order_not_found(id))?;

        let from = order.status;
        self.policy.check(id, from, status)?;
        if from == status {
            return Ok(order.clone());
        }

        order.status = status;
        if status == OrderStatus::Delivered {
            order.delivery_date = Some(shared::util::now());
        } else if from == OrderStatus::Delivered {
            order.delivery_date = None;
        }

        tracing::info!(order_id = %id, from = %from, to = %status, "Order status updated");
        Ok(order.clone())
    }
}

fn validate_all(orders: &[Order]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        validate_order(order)?;
        if !seen.insert(order.id.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::OrderDuplicateId,
                format!("Duplicate order id {}", order.id),
            )
            .with_detail("order_id", order.id.as_str()));
        }
    }
    Ok(())
}
