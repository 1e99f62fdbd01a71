//! Small helpers shared by the storefront crates

use chrono::{DateTime, Utc};

/// Current instant in UTC
///
/// Status stamps (`delivery_date`) go through here so every crate reads the
/// clock the same way.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
