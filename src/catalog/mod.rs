//! Card and spread catalogs
//!
//! Both tables are built once at start-up and shared read-only behind an
//! `Arc<Catalog>` for the lifetime of the process.

use serde::{Serialize, Serializer};
use std::collections::HashSet;

use crate::types::{Card, Spread};
use crate::{Error, Result};

pub mod spreads;

/// Display name of the bundled deck
pub const GOLDEN_DAWN_DECK_NAME: &str = "Golden Dawn Tarot";

const GOLDEN_DAWN_DECK: &str = include_str!("../../data/golden_dawn.json");

/// Read-only card and spread tables
#[derive(Debug, Clone)]
pub struct Catalog {
    deck_name: String,
    cards: Vec<Card>,
    spreads: Vec<(String, Spread)>,
}

impl Catalog {
    /// Build a catalog, validating the deck and every spread
    pub fn new(
        deck_name: impl Into<String>,
        cards: Vec<Card>,
        spreads: Vec<(String, Spread)>,
    ) -> Result<Self> {
        if cards.is_empty() {
            return Err(Error::InvalidCatalog("deck has no cards".to_string()));
        }

        let mut names = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !names.insert(card.name.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate card name: {}",
                    card.name
                )));
            }
        }

        let mut ids = HashSet::with_capacity(spreads.len());
        for (id, spread) in &spreads {
            if !ids.insert(id.as_str()) {
                return Err(Error::InvalidCatalog(format!("duplicate spread id: {}", id)));
            }
            if spread.card_count != spread.positions.len() {
                return Err(Error::InvalidCatalog(format!(
                    "spread '{}' declares {} cards but has {} positions",
                    id,
                    spread.card_count,
                    spread.positions.len()
                )));
            }
        }

        Ok(Self {
            deck_name: deck_name.into(),
            cards,
            spreads,
        })
    }

    /// The bundled 78-card Golden Dawn deck with the built-in spreads
    pub fn golden_dawn() -> Result<Self> {
        let cards: Vec<Card> = serde_json::from_str(GOLDEN_DAWN_DECK)?;
        Self::new(GOLDEN_DAWN_DECK_NAME, cards, spreads::builtin())
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    /// Every card, in table order
    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a spread by id
    pub fn resolve(&self, spread_id: &str) -> Result<&Spread> {
        self.spreads
            .iter()
            .find(|(id, _)| id == spread_id)
            .map(|(_, spread)| spread)
            .ok_or_else(|| Error::UnknownSpread(spread_id.to_string()))
    }

    /// All spreads keyed by id
    pub fn list_spreads(&self) -> SpreadTable<'_> {
        SpreadTable(&self.spreads)
    }
}

/// Borrowed view of the spread table.
///
/// Serializes as a JSON object whose keys keep registration order.
#[derive(Debug, Clone, Copy)]
pub struct SpreadTable<'a>(&'a [(String, Spread)]);

impl<'a> SpreadTable<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Spread)> {
        self.0.iter().map(|(id, spread)| (id.as_str(), spread))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SpreadTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
