//! Heuristic strength rating from the current settings.

use super::charset::{Category, CategorySet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Medium,
    Weak,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Medium => "Medium",
            Strength::Weak => "Weak",
        }
    }

    /// ANSI foreground for the indicator.
    pub fn color(self) -> &'static str {
        match self {
            Strength::Strong => "\x1b[38;5;10m",
            Strength::Medium => "\x1b[38;5;11m",
            Strength::Weak => "\x1b[38;5;9m",
        }
    }
}

/// Indicator color before anything has been rated.
pub const UNRATED_COLOR: &str = "\x1b[38;5;250m";

/// Bits of entropy for a uniform draw of `length` characters over the enabled alphabets.
pub fn entropy_bits(categories: &CategorySet, length: usize) -> f64 {
    let charset = categories.alphabet_len();
    if charset == 0 {
        return 0.0;
    }
    length as f64 * (charset as f64).log2()
}

pub fn rate(categories: &CategorySet, length: usize) -> Strength {
    let upper = categories.contains(Category::Uppercase);
    let lower = categories.contains(Category::Lowercase);
    let other = categories.contains(Category::Digit) || categories.contains(Category::Symbol);

    if upper && lower && other && length >= 8 {
        Strength::Strong
    } else if (upper || lower) && other && length >= 6 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}
