//! One side of the book: an ordered mapping from price to price level.

use std::collections::BTreeMap;

use super::level::{Arena, NodeHandle, PriceLevel};
use super::order::Order;
use super::types::{Price, Quantity, Side};

/// Ordered price levels for a single side.
///
/// Bids iterate highest-first, asks lowest-first, so the aggressive end is
/// always the first item yielded by [`BookSide::iter_from_best`]. Every
/// contained level is non-empty.
#[derive(Debug)]
pub(crate) struct BookSide {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl BookSide {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of non-empty price levels on this side.
    #[inline]
    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The most aggressive price: highest bid or lowest ask.
    pub(crate) fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// The most aggressive price strictly beyond `prev` (toward the passive
    /// end), or the best price when `prev` is `None`. Lets the matcher walk
    /// past a level whose remaining orders were all skipped.
    pub(crate) fn best_price_beyond(&self, prev: Option<Price>) -> Option<Price> {
        let Some(prev) = prev else {
            return self.best_price();
        };
        match self.side {
            Side::Buy => self.levels.range(..prev).next_back().map(|(p, _)| *p),
            Side::Sell => self
                .levels
                .range((
                    std::ops::Bound::Excluded(prev),
                    std::ops::Bound::Unbounded,
                ))
                .next()
                .map(|(p, _)| *p),
        }
    }

    pub(crate) fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub(crate) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Appends `order` at the back of its price level, creating the level on
    /// first use.
    pub(crate) fn enqueue(&mut self, arena: &mut Arena, price: Price, order: Order) -> NodeHandle {
        self.levels
            .entry(price)
            .or_default()
            .push_back(arena, order)
    }

    /// Unlinks one resting order and erases its level if that left it empty.
    pub(crate) fn remove_order(
        &mut self,
        arena: &mut Arena,
        price: Price,
        handle: NodeHandle,
    ) -> Order {
        let level = self
            .levels
            .get_mut(&price)
            .expect("order location refers to a live price level");
        let order = level.unlink(arena, handle);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        order
    }

    /// Erases the level at `price` if it exists and is empty.
    pub(crate) fn remove_level_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// Iterates levels from the aggressive end outward.
    pub(crate) fn iter_from_best(
        &self,
    ) -> Box<dyn Iterator<Item = (&Price, &PriceLevel)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter().rev()),
            Side::Sell => Box::new(self.levels.iter()),
        }
    }

    /// Sum of resting quantity on this side.
    pub(crate) fn total_quantity(&self) -> Quantity {
        self.levels.values().map(PriceLevel::total_quantity).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.levels.clear();
    }
}
