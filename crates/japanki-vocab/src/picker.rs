/*!
# Category-Filtered Random Picking

Three pure steps: parse the requested names into [`Category`] values, keep the
records in those categories, then sample one uniformly. The random source is
passed in so callers decide between `thread_rng` and a seeded generator.
*/

use crate::category::Category;
use crate::errors::{VocabError, VocabResult};
use crate::vocab::Vocab;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Parse every requested name, failing on the first unknown one.
///
/// Duplicates collapse, first occurrence wins.
pub fn parse_categories<S: AsRef<str>>(names: &[S]) -> VocabResult<Vec<Category>> {
    let mut categories = Vec::with_capacity(names.len());
    for name in names {
        let category: Category = name.as_ref().parse()?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

/// Records whose category is one of `categories`, in table order
pub fn filter_by_categories<'a>(vocabs: &'a [Vocab], categories: &[Category]) -> Vec<&'a Vocab> {
    vocabs
        .iter()
        .filter(|vocab| categories.contains(&vocab.category()))
        .collect()
}

/// Choose one record uniformly at random from `pool`
pub fn pick_random<'a, R>(
    pool: &[&'a Vocab],
    categories: &[Category],
    rng: &mut R,
) -> VocabResult<&'a Vocab>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
        .copied()
        .ok_or_else(|| VocabError::EmptySelection {
            requested: categories.to_vec(),
        })
}

/// Parse, filter and sample in one go.
///
/// Category names are validated before the table is looked at, so an unknown
/// name is reported even when the table is empty.
pub fn pick_from_categories<'a, S, R>(
    vocabs: &'a [Vocab],
    names: &[S],
    rng: &mut R,
) -> VocabResult<&'a Vocab>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let categories = parse_categories(names)?;
    let pool = filter_by_categories(vocabs, &categories);
    debug!(
        candidates = pool.len(),
        total = vocabs.len(),
        "Filtered vocabulary by category"
    );
    pick_random(&pool, &categories, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn vocab(order: u32, hiragana: &str, category: Category) -> Vocab {
        Vocab::new(order, hiragana, None, "gloss", category, None, "romanji").unwrap()
    }

    fn sample_table() -> Vec<Vocab> {
        vec![
            vocab(0, "いま", Category::Time),
            vocab(1, "くるま", Category::Manmade),
            vocab(2, "たべる", Category::Verb),
            vocab(3, "あした", Category::Time),
            vocab(4, "のむ", Category::Verb),
            vocab(5, "いす", Category::Manmade),
        ]
    }

    #[test]
    fn test_parse_categories_dedups_and_keeps_order() {
        let categories = parse_categories(&["manmade", "TIME", "Manmade"]).unwrap();
        assert_eq!(categories, vec![Category::Manmade, Category::Time]);
    }

    #[test]
    fn test_parse_categories_rejects_unknown() {
        let result = parse_categories(&["time", "Xyz"]);
        assert_eq!(result, Err(VocabError::InvalidCategory("Xyz".to_string())));
    }

    #[test]
    fn test_filter_is_exact() {
        let table = sample_table();
        let categories = parse_categories(&["time", "manmade"]).unwrap();
        let pool = filter_by_categories(&table, &categories);

        assert_eq!(pool.len(), 4);
        assert!(pool.iter().all(|v| v.category() != Category::Verb));
        let orders: Vec<u32> = pool.iter().map(|v| v.order()).collect();
        assert_eq!(orders, vec![0, 1, 3, 5]);
    }

    #[test]
    fn test_filter_with_no_categories_is_empty() {
        let table = sample_table();
        assert!(filter_by_categories(&table, &[]).is_empty());
    }

    #[test]
    fn test_pick_from_categories_only_returns_requested() {
        let table = sample_table();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let picked = pick_from_categories(&table, &["time", "manmade"], &mut rng).unwrap();
            assert!(matches!(
                picked.category(),
                Category::Time | Category::Manmade
            ));
        }
    }

    #[test]
    fn test_empty_selection() {
        let table = sample_table();
        let mut rng = StdRng::seed_from_u64(7);
        let result = pick_from_categories(&table, &["Color"], &mut rng);
        assert_eq!(
            result,
            Err(VocabError::EmptySelection {
                requested: vec![Category::Color]
            })
        );
    }

    #[test]
    fn test_invalid_category_reported_before_filtering() {
        let mut rng = StdRng::seed_from_u64(7);
        // empty table would otherwise be EmptySelection
        let result = pick_from_categories(&[], &["Xyz"], &mut rng);
        assert_eq!(result, Err(VocabError::InvalidCategory("Xyz".to_string())));
    }

    #[test]
    fn test_sampling_is_uniform() {
        let table: Vec<Vocab> = (0..5)
            .map(|i| vocab(i, &format!("ことば{i}"), Category::Sentence))
            .collect();
        let pool = filter_by_categories(&table, &[Category::Sentence]);
        let mut rng = StdRng::seed_from_u64(2024);

        let trials = 50_000;
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for _ in 0..trials {
            let picked = pick_random(&pool, &[Category::Sentence], &mut rng).unwrap();
            *counts.entry(picked.order()).or_default() += 1;
        }

        assert_eq!(counts.len(), 5);
        let expected = 1.0 / pool.len() as f64;
        for (order, count) in counts {
            let frequency = count as f64 / trials as f64;
            assert!(
                (frequency - expected).abs() < 0.01,
                "order {} picked with frequency {}, expected ~{}",
                order,
                frequency,
                expected
            );
        }
    }
}
