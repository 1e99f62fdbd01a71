//! Status label / color table

use shared::models::OrderStatus;
use std::borrow::Cow;

/// Color used for any status string outside the table
pub const UNKNOWN_STATUS_COLOR: &str = "#666";

/// How a status is drawn on a chip or tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub color: &'static str,
}

impl StatusStyle {
    pub const fn of(status: OrderStatus) -> Self {
        let (label, color) = match status {
            OrderStatus::Pending => ("En attente", "#FF9500"),
            OrderStatus::Confirmed => ("Confirmées", "#007AFF"),
            OrderStatus::Preparing => ("Préparation", "#5856D6"),
            OrderStatus::Ready => ("Prêtes", "#34C759"),
            OrderStatus::Delivered => ("Livrées", "#8E8E93"),
            OrderStatus::Cancelled => ("Annulées", "#FF2A2A"),
        };
        Self { label, color }
    }
}

/// Label for a raw status string; unknown strings pass through unchanged
pub fn status_label(raw: &str) -> Cow<'_, str> {
    match raw.parse::<OrderStatus>() {
        Ok(status) => Cow::Borrowed(StatusStyle::of(status).label),
        Err(_) => Cow::Borrowed(raw),
    }
}

/// Color for a raw status string; unknown strings get [`UNKNOWN_STATUS_COLOR`]
pub fn status_color(raw: &str) -> &'static str {
    raw.parse::<OrderStatus>()
        .map(|status| StatusStyle::of(status).color)
        .unwrap_or(UNKNOWN_STATUS_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(status_label("pending"), "En attente");
        assert_eq!(status_label("confirmed"), "Confirmées");
        assert_eq!(status_label("preparing"), "Préparation");
        assert_eq!(status_label("ready"), "Prêtes");
        assert_eq!(status_label("delivered"), "Livrées");
        assert_eq!(status_label("cancelled"), "Annulées");

        assert_eq!(status_color("pending"), "#FF9500");
        assert_eq!(status_color("confirmed"), "#007AFF");
        assert_eq!(status_color("preparing"), "#5856D6");
        assert_eq!(status_color("ready"), "#34C759");
        assert_eq!(status_color("delivered"), "#8E8E93");
        assert_eq!(status_color("cancelled"), "#FF2A2A");
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(status_label("unknown_status"), "unknown_status");
        assert_eq!(status_color("unknown_status"), "#666");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn test_typed_style_matches_raw() {
        for status in OrderStatus::ALL {
            let style = StatusStyle::of(status);
            assert_eq!(status_label(status.as_str()), style.label);
            assert_eq!(status_color(status.as_str()), style.color);
        }
    }
}
