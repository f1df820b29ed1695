//! Character categories and their alphabets.

use rand::Rng;

/// Printable symbols drawn by [`Category::Symbol`].
pub const SYMBOLS: &str = "~`!@#$%^&*()_-+={[}]|:;\"<,>.?/";

const SYMBOL_BYTES: &[u8] = SYMBOLS.as_bytes();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Category {
    /// Fixed order used for the one-per-category draw and for display.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digit,
        Category::Symbol,
    ];

    fn index(self) -> usize {
        match self {
            Category::Uppercase => 0,
            Category::Lowercase => 1,
            Category::Digit => 2,
            Category::Symbol => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Uppercase => "Include Uppercase Letters",
            Category::Lowercase => "Include Lowercase Letters",
            Category::Digit => "Include Numbers",
            Category::Symbol => "Include Symbols",
        }
    }

    /// Draw one uniformly random character from this category.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        match self {
            Category::Uppercase => rng.gen_range(b'A'..=b'Z') as char,
            Category::Lowercase => rng.gen_range(b'a'..=b'z') as char,
            Category::Digit => rng.gen_range(b'0'..=b'9') as char,
            Category::Symbol => SYMBOL_BYTES[rng.gen_range(0..SYMBOL_BYTES.len())] as char,
        }
    }

    /// Whether `c` belongs to this category's alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            Category::Uppercase => c.is_ascii_uppercase(),
            Category::Lowercase => c.is_ascii_lowercase(),
            Category::Digit => c.is_ascii_digit(),
            Category::Symbol => SYMBOLS.contains(c),
        }
    }

    pub fn alphabet_len(self) -> usize {
        match self {
            Category::Uppercase | Category::Lowercase => 26,
            Category::Digit => 10,
            Category::Symbol => SYMBOL_BYTES.len(),
        }
    }
}

/// Set of enabled categories, one independent flag each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet([bool; 4]);

impl CategorySet {
    pub const fn empty() -> Self {
        CategorySet([false; 4])
    }

    pub const fn all() -> Self {
        CategorySet([true; 4])
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0[category.index()]
    }

    pub fn insert(&mut self, category: Category) {
        self.0[category.index()] = true;
    }

    pub fn toggle(&mut self, category: Category) {
        let flag = &mut self.0[category.index()];
        *flag = !*flag;
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enabled categories in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Size of the union of enabled alphabets.
    pub fn alphabet_len(&self) -> usize {
        self.iter().map(Category::alphabet_len).sum()
    }

    /// Whether `c` belongs to any enabled alphabet.
    pub fn allows(&self, c: char) -> bool {
        self.iter().any(|cat| cat.contains(c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn symbol_alphabet_is_fixed() {
        assert_eq!(SYMBOLS.len(), 30);
        assert!(SYMBOLS.starts_with("~`!@"));
        assert!(SYMBOLS.ends_with(".?/"));
    }

    #[test]
    fn samples_stay_in_their_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for category in Category::ALL {
            for _ in 0..500 {
                let c = category.sample(&mut rng);
                assert!(category.contains(c), "{c:?} not in {category:?}");
            }
        }
    }

    #[test]
    fn ranges_are_inclusive() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: String = (0..5000).map(|_| Category::Uppercase.sample(&mut rng)).collect();
        assert!(seen.contains('A'));
        assert!(seen.contains('Z'));
        let seen: String = (0..2000).map(|_| Category::Digit.sample(&mut rng)).collect();
        assert!(seen.contains('0'));
        assert!(seen.contains('9'));
    }

    #[test]
    fn set_toggle_and_len() {
        let mut set = CategorySet::empty();
        assert!(set.is_empty());
        set.toggle(Category::Digit);
        set.insert(Category::Uppercase);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Category::Uppercase, Category::Digit]
        );
        set.toggle(Category::Digit);
        set.toggle(Category::Uppercase);
        assert!(set.is_empty());
        assert_eq!(CategorySet::all().alphabet_len(), 26 + 26 + 10 + 30);
    }
}
