//! Currency and date rendering (fr-FR)

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use shared::error::AppResult;

use crate::orders::money::{round_money, try_decimal};
use crate::utils::time;

/// fr-FR thousands separator (narrow no-break space)
pub const GROUP_SEPARATOR: char = '\u{202f}';
/// fr-FR decimal separator
pub const DECIMAL_SEPARATOR: char = ',';
/// `DD/MM/YYYY HH:mm`
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// `1 234,5 FCFA`: grouped integer part, at most 2 decimals, trailing zeros trimmed
pub fn format_currency(amount: f64, suffix: &str) -> String {
    let number = match try_decimal(amount) {
        Some(value) => format_amount(value),
        // beyond the Decimal range: whole units straight from the float
        None if amount.is_finite() => {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{}{}", sign, group_thousands(&format!("{:.0}", amount.abs())))
        }
        None => amount.to_string(),
    };
    format!("{} {}", number, suffix)
}

/// Number part of [`format_currency`]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_money(amount).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Render an instant as `DD/MM/YYYY HH:mm` in the business time zone
pub fn format_datetime(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DATE_FORMAT).to_string()
}

/// Parse an ISO-8601 string and render it; unparseable input is an error
pub fn format_date(iso: &str, tz: Tz) -> AppResult<String> {
    time::parse_timestamp(iso, tz).map(|instant| format_datetime(instant, tz))
}
