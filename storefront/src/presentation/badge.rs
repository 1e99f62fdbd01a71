//! Notification badge (cart icon, status tabs)

/// Largest count printed before switching to `"99+"`
pub const BADGE_MAX: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeDisplay {
    /// Small dot, no text
    Dot,
    /// Count text
    Count(String),
}

/// What a badge renders, `None` when hidden
///
/// A zero count hides the badge unless it is a dot.
pub fn badge(count: usize, dot: bool) -> Option<BadgeDisplay> {
    if dot {
        return Some(BadgeDisplay::Dot);
    }
    match count {
        0 => None,
        n if n > BADGE_MAX => Some(BadgeDisplay::Count(format!("{}+", BADGE_MAX))),
        n => Some(BadgeDisplay::Count(n.to_string())),
    }
}
