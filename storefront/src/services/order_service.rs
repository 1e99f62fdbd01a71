//! Order collaborator

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Order, OrderStatus};
use std::sync::Arc;

use crate::orders::OrderStore;

/// Fetch orders, update one order's status
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Every order visible to the current vendor
    async fn fetch_orders(&self) -> AppResult<Vec<Order>>;

    /// Set a new status and return the updated order
    async fn update_order_status(&self, id: &str, status: OrderStatus) -> AppResult<Order>;
}

/// [`OrderService`] over an in-memory [`OrderStore`]
#[derive(Clone)]
pub struct SeedOrderService {
    store: Arc<OrderStore>,
}

impl SeedOrderService {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<OrderStore> {
        &self.store
    }
}

#[async_trait]
impl OrderService for SeedOrderService {
    async fn fetch_orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.store.snapshot())
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        self.store.update_status(id, status).inspect_err(|e| {
            tracing::warn!(order_id = %id, code = %e.code, "Status update rejected: {}", e);
        })
    }
}
