//! Draw engine
//!
//! Samples cards uniformly without replacement and flips a fair coin per
//! card for orientation.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::types::DrawnCard;

/// Draws cards from a shared catalog
#[derive(Debug, Clone)]
pub struct DrawEngine {
    catalog: Arc<Catalog>,
}

impl DrawEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Draw `count` distinct cards using fresh entropy
    pub fn draw(&self, count: usize, allow_reversed: bool) -> Vec<DrawnCard> {
        let mut rng = fastrand::Rng::new();
        self.draw_with(&mut rng, count, allow_reversed)
    }

    /// Draw with a caller-supplied generator.
    ///
    /// `count` is clamped to the deck size. Output order is draw order.
    pub fn draw_with(
        &self,
        rng: &mut fastrand::Rng,
        count: usize,
        allow_reversed: bool,
    ) -> Vec<DrawnCard> {
        let cards = self.catalog.all_cards();
        let available = cards.len();

        let count = if count > available {
            tracing::warn!(
                requested = count,
                available,
                "Requested more cards than the deck holds; drawing the whole deck"
            );
            available
        } else {
            count
        };

        // Partial Fisher-Yates: the first `count` slots end up a uniform sample.
        let mut indices: Vec<usize> = (0..available).collect();
        for i in 0..count {
            let j = rng.usize(i..available);
            indices.swap(i, j);
        }

        indices[..count]
            .iter()
            .map(|&idx| {
                let reversed = allow_reversed && rng.bool();
                DrawnCard::new(cards[idx].clone(), reversed)
            })
            .collect()
    }
}
