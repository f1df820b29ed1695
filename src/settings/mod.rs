//! Generation settings and their bounds.

use crate::pass::{Category, CategorySet, effective_length};

/// Slider bounds for the interactive length selector.
pub const LENGTH_MIN: usize = 1;
pub const LENGTH_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub categories: CategorySet,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub show_strength: bool,
}

impl Settings {
    /// Raise the length to the enabled category count when it falls below it.
    /// Returns true if the length changed.
    pub fn coerce_length(&mut self) -> bool {
        let coerced = effective_length(self.length, &self.categories);
        let changed = coerced != self.length;
        self.length = coerced;
        changed
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 10,
            categories: [Category::Uppercase].into_iter().collect(),
            number_of_passwords: 1,
            to_clipboard: false,
            show_strength: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length_within_slider() {
        let s = Settings::default();
        assert!((LENGTH_MIN..=LENGTH_MAX).contains(&s.length));
        assert_eq!(s.categories.len(), 1);
    }

    #[test]
    fn coerce_raises_only() {
        let mut s = Settings {
            length: 2,
            categories: CategorySet::all(),
            ..Default::default()
        };
        assert!(s.coerce_length());
        assert_eq!(s.length, 4);
        assert!(!s.coerce_length());
    }
}
