//! Vendor dashboard aggregates

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Order, OrderStatus};

use super::money::{to_decimal, to_f64};
use crate::utils::time;

/// Dashboard header numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Every order, unfiltered
    pub total_orders: usize,
    pub pending_orders: usize,
    pub ready_orders: usize,
    /// Sum of delivered orders placed today (business time zone)
    pub today_revenue: f64,
    /// Per-status counts in lifecycle order, used for the filter tab badges
    pub status_counts: Vec<(OrderStatus, usize)>,
}

impl DashboardStats {
    /// Compute against an explicit "today"
    pub fn compute_at(orders: &[Order], today: NaiveDate, tz: Tz) -> Self {
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        let today_revenue: Decimal = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .filter(|o| time::local_date(o.order_date, tz) == today)
            .map(|o| to_decimal(o.total))
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Self {
            total_orders: orders.len(),
            pending_orders: count(OrderStatus::Pending),
            ready_orders: count(OrderStatus::Ready),
            today_revenue: to_f64(today_revenue),
            status_counts: OrderStatus::ALL
                .into_iter()
                .map(|status| (status, count(status)))
                .collect(),
        }
    }

    /// Compute against the current date in `tz`
    pub fn compute(orders: &[Order], tz: Tz) -> Self {
        Self::compute_at(orders, time::today(tz), tz)
    }

    pub fn count_for(&self, status: OrderStatus) -> usize {
        self.status_counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::test_support::order;
    use chrono_tz::Europe::Paris;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_counts() {
        let orders = vec![
            order("1", OrderStatus::Pending, "2024-01-15T10:00:00Z"),
            order("2", OrderStatus::Pending, "2024-01-15T10:00:00Z"),
            order("3", OrderStatus::Ready, "2024-01-15T10:00:00Z"),
            order("4", OrderStatus::Cancelled, "2024-01-15T10:00:00Z"),
        ];
        let stats = DashboardStats::compute_at(&orders, day(2024, 1, 15), Paris);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.pending_orders, 2);
        assert_eq!(stats.ready_orders, 1);
        assert_eq!(stats.count_for(OrderStatus::Cancelled), 1);
        assert_eq!(stats.count_for(OrderStatus::Delivered), 0);
        assert_eq!(stats.status_counts.len(), 6);
    }

    #[test]
    fn test_today_revenue_only_delivered_today() {
        let mut delivered_today = order("1", OrderStatus::Delivered, "2024-01-15T10:00:00Z");
        delivered_today.total = 12500.0;
        let mut delivered_yesterday = order("2", OrderStatus::Delivered, "2024-01-14T10:00:00Z");
        delivered_yesterday.total = 3000.0;
        let mut ready_today = order("3", OrderStatus::Ready, "2024-01-15T11:00:00Z");
        ready_today.total = 800.0;

        let mut orders = vec![delivered_today, delivered_yesterday, ready_today];
        let stats = DashboardStats::compute_at(&orders, day(2024, 1, 15), Paris);
        assert_eq!(stats.today_revenue, 12500.0);

        orders[0].status = OrderStatus::Pending;
        let stats = DashboardStats::compute_at(&orders, day(2024, 1, 15), Paris);
        assert_eq!(stats.today_revenue, 0.0);
    }

    #[test]
    fn test_today_uses_business_zone() {
        // 23:30 UTC on the 14th is the 15th in Paris
        let late = order("1", OrderStatus::Delivered, "2024-01-14T23:30:00Z");
        let orders = vec![late];
        let in_paris = DashboardStats::compute_at(&orders, day(2024, 1, 15), Paris);
        assert_eq!(in_paris.today_revenue, orders[0].total);

        let in_utc = DashboardStats::compute_at(&orders, day(2024, 1, 15), chrono_tz::UTC);
        assert_eq!(in_utc.today_revenue, 0.0);
    }

    #[test]
    fn test_revenue_sums_without_float_drift() {
        let mut a = order("1", OrderStatus::Delivered, "2024-01-15T08:00:00Z");
        a.total = 0.1;
        let mut b = order("2", OrderStatus::Delivered, "2024-01-15T09:00:00Z");
        b.total = 0.2;
        let stats = DashboardStats::compute_at(&[a, b], day(2024, 1, 15), Paris);
        assert_eq!(stats.today_revenue, 0.3);
    }

    #[test]
    fn test_revenue_saturates_instead_of_panicking() {
        let mut a = order("1", OrderStatus::Delivered, "2024-01-15T08:00:00Z");
        a.total = 7e28;
        let mut b = order("2", OrderStatus::Delivered, "2024-01-15T09:00:00Z");
        b.total = 7e28;
        let stats = DashboardStats::compute_at(&[a, b], day(2024, 1, 15), Paris);
        assert!(stats.today_revenue > 7e28);
    }
}
