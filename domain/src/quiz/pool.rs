//! Per-category question pools.
//!
//! A pool is drawn without replacement: every draw removes the item it
//! returns. Refills replace the whole contents instead of appending.

use crate::core::question::{QuestionItem, QuestionKind};
use rand::Rng;

/// Not-yet-asked questions of a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPool {
    kind: QuestionKind,
    items: Vec<QuestionItem>,
}

impl CategoryPool {
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    pub fn with_items(kind: QuestionKind, items: Vec<QuestionItem>) -> Self {
        let mut pool = Self::new(kind);
        pool.replace(items);
        pool
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    /// Remove and return a uniformly random item, or `None` if empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<QuestionItem> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.items.len());
        Some(self.items.remove(index))
    }

    /// Replace the contents with a freshly fetched set.
    ///
    /// Items of a different kind are dropped; duplicates are kept.
    pub fn replace(&mut self, items: Vec<QuestionItem>) {
        let kind = self.kind;
        self.items = items.into_iter().filter(|item| item.kind() == kind).collect();
    }

    /// Return an item that was drawn but could not be asked
    pub fn put_back(&mut self, item: QuestionItem) {
        if item.kind() == self.kind {
            self.items.push(item);
        }
    }
}

/// The three category pools of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSet {
    quotes: CategoryPool,
    emojis: CategoryPool,
    images: CategoryPool,
}

impl PoolSet {
    pub fn new() -> Self {
        Self {
            quotes: CategoryPool::new(QuestionKind::Quote),
            emojis: CategoryPool::new(QuestionKind::Emoji),
            images: CategoryPool::new(QuestionKind::Image),
        }
    }

    pub fn from_items(
        quotes: Vec<QuestionItem>,
        emojis: Vec<QuestionItem>,
        images: Vec<QuestionItem>,
    ) -> Self {
        Self {
            quotes: CategoryPool::with_items(QuestionKind::Quote, quotes),
            emojis: CategoryPool::with_items(QuestionKind::Emoji, emojis),
            images: CategoryPool::with_items(QuestionKind::Image, images),
        }
    }

    pub fn pool(&self, kind: QuestionKind) -> &CategoryPool {
        match kind {
            QuestionKind::Quote => &self.quotes,
            QuestionKind::Emoji => &self.emojis,
            QuestionKind::Image => &self.images,
        }
    }

    pub fn pool_mut(&mut self, kind: QuestionKind) -> &mut CategoryPool {
        match kind {
            QuestionKind::Quote => &mut self.quotes,
            QuestionKind::Emoji => &mut self.emojis,
            QuestionKind::Image => &mut self.images,
        }
    }

    pub fn len(&self, kind: QuestionKind) -> usize {
        self.pool(kind).len()
    }

    pub fn is_empty(&self, kind: QuestionKind) -> bool {
        self.pool(kind).is_empty()
    }

    /// True when every category is depleted
    pub fn all_empty(&self) -> bool {
        QuestionKind::ALL.iter().all(|kind| self.is_empty(*kind))
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, kind: QuestionKind, rng: &mut R) -> Option<QuestionItem> {
        self.pool_mut(kind).draw(rng)
    }

    pub fn replace(&mut self, kind: QuestionKind, items: Vec<QuestionItem>) {
        self.pool_mut(kind).replace(items);
    }

    pub fn put_back(&mut self, item: QuestionItem) {
        self.pool_mut(item.kind()).put_back(item);
    }
}

impl Default for PoolSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quotes(n: usize) -> Vec<QuestionItem> {
        (0..n)
            .map(|i| QuestionItem::quote(format!("quote {i}"), format!("Character {i}")))
            .collect()
    }

    #[test]
    fn test_draw_removes_exactly_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = CategoryPool::with_items(QuestionKind::Quote, quotes(5));

        let drawn = pool.draw(&mut rng).unwrap();
        assert_eq!(pool.len(), 4);
        assert!(!pool.items().contains(&drawn));
    }

    #[test]
    fn test_draw_until_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = CategoryPool::with_items(QuestionKind::Quote, quotes(3));

        let mut seen = Vec::new();
        while let Some(item) = pool.draw(&mut rng) {
            seen.push(item);
        }
        assert_eq!(seen.len(), 3);
        assert!(pool.is_empty());
        assert!(pool.draw(&mut rng).is_none());
    }

    #[test]
    fn test_replace_does_not_append() {
        let mut pool = CategoryPool::with_items(QuestionKind::Quote, quotes(3));
        pool.replace(quotes(2));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_replace_keeps_duplicates_and_drops_foreign_kinds() {
        let mut pool = CategoryPool::new(QuestionKind::Emoji);
        pool.replace(vec![
            QuestionItem::emoji("🍖", "Monkey D. Luffy"),
            QuestionItem::emoji("🍖", "Monkey D. Luffy"),
            QuestionItem::quote("not an emoji", "Nami"),
        ]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_put_back_restores_drawn_item() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut pools = PoolSet::from_items(quotes(2), vec![], vec![]);

        let drawn = pools.draw(QuestionKind::Quote, &mut rng).unwrap();
        pools.put_back(drawn.clone());
        assert_eq!(pools.len(QuestionKind::Quote), 2);
        assert!(pools.pool(QuestionKind::Quote).items().contains(&drawn));
    }

    #[test]
    fn test_pool_set_all_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pools = PoolSet::from_items(vec![], vec![QuestionItem::emoji("🎩", "Sabo")], vec![]);
        assert!(!pools.all_empty());

        pools.draw(QuestionKind::Emoji, &mut rng).unwrap();
        assert!(pools.all_empty());
    }
}
