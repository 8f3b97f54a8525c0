//! Question category selection.

use crate::core::question::QuestionKind;
use crate::quiz::mode::Mode;
use crate::quiz::pool::PoolSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Relative weight of each category in [`Mode::Random`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub quote: u32,
    pub emoji: u32,
    pub image: u32,
}

impl CategoryWeights {
    pub fn new(quote: u32, emoji: u32, image: u32) -> Self {
        Self { quote, emoji, image }
    }

    pub fn weight(&self, kind: QuestionKind) -> u32 {
        match kind {
            QuestionKind::Quote => self.quote,
            QuestionKind::Emoji => self.emoji,
            QuestionKind::Image => self.image,
        }
    }

    /// Sum of all weights, widened so that no combination overflows
    pub fn total(&self) -> u64 {
        u64::from(self.quote) + u64::from(self.emoji) + u64::from(self.image)
    }
}

impl Default for CategoryWeights {
    /// Quotes 4, emojis 3, images 3
    fn default() -> Self {
        Self::new(4, 3, 3)
    }
}

/// Choose the category of the next question.
///
/// A fixed mode returns its category even when that pool is empty; the
/// caller has to refill first. [`Mode::Random`] picks among non-empty pools
/// in proportion to `weights` and returns `None` when there is nothing
/// to pick from.
pub fn pick_kind<R: Rng + ?Sized>(
    mode: Mode,
    pools: &PoolSet,
    weights: &CategoryWeights,
    rng: &mut R,
) -> Option<QuestionKind> {
    if let Some(kind) = mode.kind() {
        return Some(kind);
    }

    let candidates: Vec<(QuestionKind, u64)> = QuestionKind::ALL
        .iter()
        .filter(|kind| !pools.is_empty(**kind))
        .map(|kind| (*kind, u64::from(weights.weight(*kind))))
        .filter(|(_, weight)| *weight > 0)
        .collect();

    let total: u64 = candidates.iter().map(|(_, weight)| weight).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.random_range(0..total);
    for (kind, weight) in candidates {
        if roll < weight {
            return Some(kind);
        }
        roll -= weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::QuestionItem;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mixed_pools() -> PoolSet {
        PoolSet::from_items(
            vec![],
            vec![QuestionItem::emoji("x", "Nami")],
            vec![
                QuestionItem::image("http://img/y", "Zoro"),
                QuestionItem::image("http://img/z", "Sanji"),
            ],
        )
    }

    #[test]
    fn test_fixed_mode_ignores_pool_state() {
        let mut rng = StdRng::seed_from_u64(0);
        let pools = PoolSet::new();
        let weights = CategoryWeights::default();
        assert_eq!(
            pick_kind(Mode::Quote, &pools, &weights, &mut rng),
            Some(QuestionKind::Quote)
        );
        assert_eq!(
            pick_kind(Mode::Image, &pools, &weights, &mut rng),
            Some(QuestionKind::Image)
        );
    }

    #[test]
    fn test_random_with_all_empty_returns_none() {
        let mut rng = StdRng::seed_from_u64(0);
        let pools = PoolSet::new();
        assert_eq!(
            pick_kind(Mode::Random, &pools, &CategoryWeights::default(), &mut rng),
            None
        );
    }

    #[test]
    fn test_random_skips_empty_pools_and_weights_evenly() {
        let mut rng = StdRng::seed_from_u64(42);
        let pools = mixed_pools();
        let weights = CategoryWeights::default();

        let (mut emoji, mut image) = (0u32, 0u32);
        for _ in 0..6000 {
            match pick_kind(Mode::Random, &pools, &weights, &mut rng) {
                Some(QuestionKind::Emoji) => emoji += 1,
                Some(QuestionKind::Image) => image += 1,
                other => panic!("unexpected pick: {:?}", other),
            }
        }
        // Weights 3:3 -> roughly equal
        let ratio = emoji as f64 / image as f64;
        assert!((0.85..1.15).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn test_random_respects_default_weighting() {
        let mut rng = StdRng::seed_from_u64(9);
        let pools = PoolSet::from_items(
            vec![QuestionItem::quote("q", "Usopp")],
            vec![QuestionItem::emoji("e", "Usopp")],
            vec![QuestionItem::image("i", "Usopp")],
        );
        let weights = CategoryWeights::default();

        let trials = 10_000;
        let quotes = (0..trials)
            .filter(|_| {
                pick_kind(Mode::Random, &pools, &weights, &mut rng) == Some(QuestionKind::Quote)
            })
            .count();
        let share = quotes as f64 / trials as f64;
        assert!((0.37..0.43).contains(&share), "quote share was {share}");
    }

    #[test]
    fn test_total_of_maximal_weights() {
        let weights = CategoryWeights::new(u32::MAX, 1, u32::MAX);
        assert_eq!(weights.total(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_huge_weights_still_pick() {
        let mut rng = StdRng::seed_from_u64(6);
        let pools = mixed_pools();
        let weights = CategoryWeights::new(0, u32::MAX, 1);

        let emoji = (0..100)
            .filter(|_| {
                pick_kind(Mode::Random, &pools, &weights, &mut rng) == Some(QuestionKind::Emoji)
            })
            .count();
        assert!(emoji > 90);
    }

    #[test]
    fn test_zero_weight_category_is_never_picked() {
        let mut rng = StdRng::seed_from_u64(5);
        let pools = mixed_pools();
        let weights = CategoryWeights::new(4, 0, 3);
        for _ in 0..200 {
            assert_eq!(
                pick_kind(Mode::Random, &pools, &weights, &mut rng),
                Some(QuestionKind::Image)
            );
        }
    }
}
