//! Truncated lists with a "+N more" caption

/// First `limit` items of a list plus how many were left out
#[derive(Debug, Clone, PartialEq)]
pub struct Truncated<'a, T> {
    pub visible: &'a [T],
    pub hidden: usize,
}

impl<T> Truncated<'_, T> {
    /// `+1 article supplémentaire` / `+N articles supplémentaires`, `None` when nothing is hidden
    pub fn caption(&self) -> Option<String> {
        match self.hidden {
            0 => None,
            1 => Some("+1 article supplémentaire".to_string()),
            n => Some(format!("+{} articles supplémentaires", n)),
        }
    }
}

pub fn truncate_list<T>(items: &[T], limit: usize) -> Truncated<'_, T> {
    let shown = limit.min(items.len());
    Truncated {
        visible: &items[..shown],
        hidden: items.len() - shown,
    }
}
