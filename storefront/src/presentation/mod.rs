//! Presentation rules
//!
//! Pure display derivations used by the order screens: status chips, badges,
//! truncated item lists, money and dates. [`OrderHistoryEntry`] combines them
//! into one ready-to-draw row.

pub mod badge;
pub mod format;
pub mod status;
pub mod truncate;

pub use badge::{BadgeDisplay, badge};
pub use format::{format_amount, format_currency, format_date, format_datetime};
pub use status::{StatusStyle, UNKNOWN_STATUS_COLOR, status_color, status_label};
pub use truncate::{Truncated, truncate_list};

use chrono_tz::Tz;
use serde::Serialize;
use shared::models::{Order, OrderItem};

/// Display options coming from configuration
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub timezone: Tz,
    pub currency_suffix: String,
    /// Item lines shown before the "+N" caption
    pub preview_limit: usize,
}

/// One row of the order history list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderHistoryEntry {
    pub id: String,
    pub customer_name: String,
    pub date: String,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub total: String,
    /// Units across all lines
    pub item_count: u32,
    /// `"2 × Riz parfumé 5kg"`
    pub item_lines: Vec<String>,
    pub more_caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_on: Option<String>,
}

impl OrderHistoryEntry {
    pub fn from_order(order: &Order, options: &DisplayOptions) -> Self {
        let style = StatusStyle::of(order.status);
        let preview = truncate_list(&order.items, options.preview_limit);

        Self {
            id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            date: format_datetime(order.order_date, options.timezone),
            status_label: style.label,
            status_color: style.color,
            total: format_currency(order.total, &options.currency_suffix),
            item_count: order.item_count(),
            item_lines: preview.visible.iter().map(item_line).collect(),
            more_caption: preview.caption(),
            delivered_on: order
                .delivery_date
                .map(|at| format_datetime(at, options.timezone)),
        }
    }
}

fn item_line(item: &OrderItem) -> String {
    format!("{} × {}", item.quantity, item.product_name)
}
