//! Password generation.

use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use super::charset::{Category, CategorySet};
use crate::error::{Error, Result};

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 4096;

/// Length actually generated: one character per enabled category is mandatory.
pub fn effective_length(length: usize, categories: &CategorySet) -> usize {
    length.max(categories.len())
}

/// Check a request before generating, returning the effective length.
pub fn validate(length: usize, categories: &CategorySet) -> Result<usize> {
    if categories.is_empty() {
        return Err(Error::NoCategories);
    }
    if length > MAX_LENGTH {
        return Err(Error::LengthTooLarge(length));
    }
    Ok(effective_length(length, categories))
}

/// Generate a single password containing at least one character of every
/// enabled category, in uniformly shuffled order.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    categories: &CategorySet,
) -> Result<Zeroizing<String>> {
    let length = validate(length, categories)?;
    let enabled: Vec<Category> = categories.iter().collect();
    let mut buf: Vec<char> = Vec::new();

    // Coverage first, then fill
    buf.extend(enabled.iter().map(|c| c.sample(rng)));
    while buf.len() < length {
        let category = enabled[rng.gen_range(0..enabled.len())];
        buf.push(category.sample(rng));
    }

    shuffle(rng, &mut buf);
    debug_assert!(buf.iter().all(|c| categories.allows(*c)));

    let pass = Zeroizing::new(buf.iter().collect::<String>());
    buf.zeroize();
    tracing::debug!(length, categories = enabled.len(), "password generated");
    Ok(pass)
}

/// Generate `count` passwords with the same settings.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    categories: &CategorySet,
    count: usize,
) -> Result<Vec<Zeroizing<String>>> {
    (0..count)
        .map(|_| generate(rng, length, categories))
        .collect()
}

/// Fisher–Yates: swap each slot from the back with a uniform slot at or before it.
#[inline]
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn subsets() -> Vec<CategorySet> {
        (1u8..16)
            .map(|mask| {
                Category::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, c)| c)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn length_coverage_and_alphabet_hold_for_every_subset() {
        let mut rng = StdRng::seed_from_u64(42);
        for set in subsets() {
            for length in set.len()..=20 {
                let pass = generate(&mut rng, length, &set).unwrap();
                assert_eq!(pass.chars().count(), length);
                for category in set.iter() {
                    assert!(
                        pass.chars().any(|c| category.contains(c)),
                        "{category:?} missing from {:?}",
                        pass.as_str()
                    );
                }
                assert!(pass.chars().all(|c| set.allows(c)));
            }
        }
    }

    #[test]
    fn short_length_is_raised_to_category_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let pass = generate(&mut rng, 2, &CategorySet::all()).unwrap();
        assert_eq!(pass.len(), 4);
        let pass = generate(&mut rng, 0, &CategorySet::all()).unwrap();
        assert_eq!(pass.len(), 4);
    }

    #[test]
    fn digits_only_keeps_requested_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let digits: CategorySet = [Category::Digit].into_iter().collect();
        let pass = generate(&mut rng, 5, &digits).unwrap();
        assert_eq!(pass.len(), 5);
        assert!(pass.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_set_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(&mut rng, 10, &CategorySet::empty()),
            Err(Error::NoCategories)
        ));
    }

    #[test]
    fn oversized_length_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(&mut rng, usize::MAX, &CategorySet::all()),
            Err(Error::LengthTooLarge(usize::MAX))
        ));
        let pass = generate(&mut rng, MAX_LENGTH, &CategorySet::all()).unwrap();
        assert_eq!(pass.len(), MAX_LENGTH);
        assert!(matches!(
            validate(MAX_LENGTH + 1, &CategorySet::all()),
            Err(Error::LengthTooLarge(_))
        ));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(9);
        let original: Vec<u32> = (0..64).collect();
        let mut shuffled = original.clone();
        shuffle(&mut rng, &mut shuffled);
        assert_ne!(shuffled, original);
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn shuffle_moves_coverage_characters() {
        // Without the shuffle the first char would always be uppercase
        let mut rng = StdRng::seed_from_u64(3);
        let set = CategorySet::all();
        let leading_upper = (0..200)
            .filter(|_| {
                let pass = generate(&mut rng, 8, &set).unwrap();
                pass.starts_with(|c: char| c.is_ascii_uppercase())
            })
            .count();
        assert!(leading_upper < 150, "leading uppercase {leading_upper}/200");
    }

    #[test]
    fn batch_returns_count_passwords() {
        let mut rng = StdRng::seed_from_u64(21);
        let batch = generate_batch(&mut rng, 12, &CategorySet::all(), 3).unwrap();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn thread_rng_works() {
        let pass = generate(&mut rand::thread_rng(), 16, &CategorySet::all()).unwrap();
        assert_eq!(pass.len(), 16);
    }
}
