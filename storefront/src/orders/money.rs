//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for storage/serialization.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderItem};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per item (1,000,000 FCFA)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
pub const MAX_QUANTITY: u32 = 9999;

/// Convert f64 to Decimal, `None` for NaN, infinities and values outside the Decimal range
#[inline]
pub fn try_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert f64 to Decimal for calculation
///
/// Out-of-range values saturate at the Decimal bounds; NaN becomes zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    match try_decimal(value) {
        Some(decimal) => decimal,
        None if value.is_nan() => Decimal::ZERO,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::MIN,
    }
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Round half-up to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn amount_overflow(what: &str) -> AppError {
    AppError::with_message(
        ErrorCode::OrderItemInvalid,
        format!("{} is outside the supported amount range", what),
    )
}

/// price × quantity for one line
pub fn line_total(item: &OrderItem) -> AppResult<Decimal> {
    try_decimal(item.price)
        .and_then(|price| price.checked_mul(Decimal::from(item.quantity)))
        .ok_or_else(|| amount_overflow("line total").with_detail("item_id", item.id.as_str()))
}

fn items_sum(order: &Order) -> AppResult<Decimal> {
    order.items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(line_total(item)?)
            .ok_or_else(|| amount_overflow("order total").with_detail("order_id", order.id.as_str()))
    })
}

/// Σ price × quantity over the order lines
pub fn computed_total(order: &Order) -> AppResult<f64> {
    items_sum(order).map(to_f64)
}

/// Difference between the stored total and the item lines
pub fn total_drift(order: &Order) -> AppResult<Decimal> {
    let stored = try_decimal(order.total)
        .ok_or_else(|| amount_overflow("stored total").with_detail("order_id", order.id.as_str()))?;
    let drift = stored
        .checked_sub(items_sum(order)?)
        .ok_or_else(|| amount_overflow("total drift").with_detail("order_id", order.id.as_str()))?;
    Ok(round_money(drift))
}

fn invalid_item(order_id: &str, item: &OrderItem, message: String) -> AppError {
    AppError::with_message(ErrorCode::OrderItemInvalid, message)
        .with_detail("order_id", order_id)
        .with_detail("item_id", item.id.as_str())
}

/// Validate one line: quantity in 1..=MAX_QUANTITY, finite price in 0..=MAX_PRICE
fn validate_item(order_id: &str, item: &OrderItem) -> AppResult<()> {
    if item.quantity == 0 {
        return Err(invalid_item(
            order_id,
            item,
            format!("quantity must be positive, got 0 (item {})", item.id),
        ));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(invalid_item(
            order_id,
            item,
            format!(
                "quantity exceeds maximum allowed ({}), got {} (item {})",
                MAX_QUANTITY, item.quantity, item.id
            ),
        ));
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(invalid_item(
            order_id,
            item,
            format!(
                "price must be a finite non-negative number, got {} (item {})",
                item.price, item.id
            ),
        ));
    }
    if item.price > MAX_PRICE {
        return Err(invalid_item(
            order_id,
            item,
            format!(
                "price exceeds maximum allowed ({}), got {} (item {})",
                MAX_PRICE, item.price, item.id
            ),
        ));
    }
    Ok(())
}

/// Validate an order before it enters a store
///
/// The stored `total` must agree with the lines within [`MONEY_TOLERANCE`].
pub fn validate_order(order: &Order) -> AppResult<()> {
    if order.id.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "order id must not be empty",
        ));
    }
    if order.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("order_id", order.id.as_str()));
    }
    for item in &order.items {
        validate_item(&order.id, item)?;
    }
    if try_decimal(order.total).is_none() {
        return Err(AppError::validation(format!(
            "total must be a finite number within the amount range, got {}",
            order.total
        ))
        .with_detail("order_id", order.id.as_str()));
    }

    let drift = total_drift(order)?;
    if drift.abs() >= MONEY_TOLERANCE {
        return Err(AppError::with_message(
            ErrorCode::OrderTotalMismatch,
            format!(
                "order {} stores total {} but its items sum to {}",
                order.id,
                order.total,
                computed_total(order)?
            ),
        )
        .with_detail("order_id", order.id.as_str())
        .with_detail("drift", drift.to_f64().unwrap_or_default()));
    }
    Ok(())
}
