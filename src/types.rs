//! Core types for arcana

use serde::{Deserialize, Serialize};

/// A single tarot card as defined by the deck table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub suit: Option<String>,
    #[serde(default)]
    pub element: Option<String>,
    pub meaning_upright: String,
    pub meaning_reversed: String,
    pub golden_dawn_correspondence: String,
    #[serde(default)]
    pub hebrew_letter: Option<String>,
    #[serde(default)]
    pub astrological_correspondence: Option<String>,
    #[serde(default)]
    pub tree_of_life_path: Option<u32>,
}

/// A named layout of positions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spread {
    pub name: String,
    pub positions: Vec<String>,
    pub description: String,
    pub card_count: usize,
}

impl Spread {
    pub fn new(name: &str, positions: &[&str], description: &str) -> Self {
        Self {
            name: name.to_string(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            description: description.to_string(),
            card_count: positions.len(),
        }
    }

    /// Label for the card at `index`, synthesised when the spread is too short
    pub fn position_label(&self, index: usize) -> String {
        self.positions
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Position {}", index + 1))
    }
}

/// Which of a card's two meanings applies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Upright => "Upright",
            Orientation::Reversed => "Reversed",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card as it came out of a draw
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Card,
    pub reversed: bool,
    pub meaning: String,
    pub orientation: Orientation,
}

impl DrawnCard {
    pub fn new(card: Card, reversed: bool) -> Self {
        let meaning = if reversed {
            card.meaning_reversed.clone()
        } else {
            card.meaning_upright.clone()
        };

        Self {
            card,
            reversed,
            meaning,
            orientation: Orientation::from_reversed(reversed),
        }
    }
}

/// A completed reading, the unit of persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reading {
    pub spread_type: String,
    #[serde(default)]
    pub question: Option<String>,
    pub cards_drawn: Vec<DrawnCard>,
    pub interpretation: String,
    /// RFC 3339 UTC timestamp, stored verbatim
    pub timestamp: String,
    pub reading_id: String,
}

/// Body of `POST /reading`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default = "default_spread_type")]
    pub spread_type: String,
    #[serde(default = "default_include_reversed")]
    pub include_reversed: bool,
    #[serde(flatten)]
    pub options: ReadingOptions,
}

impl ReadingRequest {
    pub fn new(spread_type: impl Into<String>) -> Self {
        Self {
            question: None,
            spread_type: spread_type.into(),
            include_reversed: default_include_reversed(),
            options: ReadingOptions::default(),
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_reversed(mut self, include_reversed: bool) -> Self {
        self.include_reversed = include_reversed;
        self
    }
}

fn default_spread_type() -> String {
    "three_card".to_string()
}

fn default_include_reversed() -> bool {
    true
}

/// Request options accepted for client compatibility.
///
/// None of these change the reading: there is one deck, one interpretation
/// style, and birth data is not consulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingOptions {
    #[serde(default = "default_deck_type")]
    pub deck_type: String,
    #[serde(default = "default_interpretation_style")]
    pub interpretation_style: String,
    #[serde(default)]
    pub user_birth_info: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            deck_type: default_deck_type(),
            interpretation_style: default_interpretation_style(),
            user_birth_info: None,
        }
    }
}

impl ReadingOptions {
    /// True when the caller asked for anything other than the defaults
    pub fn is_customised(&self) -> bool {
        self != &Self::default()
    }
}

fn default_deck_type() -> String {
    "golden_dawn".to_string()
}

fn default_interpretation_style() -> String {
    "traditional".to_string()
}
