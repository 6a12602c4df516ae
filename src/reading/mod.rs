//! Reading pipeline: resolve spread, draw, interpret, persist

use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::IdScheme;
use crate::draw::DrawEngine;
use crate::interpret::Interpreter;
use crate::storage::ReadingStore;
use crate::types::{Reading, ReadingRequest};
use crate::Result;

pub mod id;

/// Creates and retrieves readings
pub struct ReadingService {
    engine: DrawEngine,
    interpreter: Interpreter,
    store: ReadingStore,
    id_scheme: IdScheme,
}

impl ReadingService {
    pub fn new(
        catalog: Arc<Catalog>,
        interpreter: Interpreter,
        store: ReadingStore,
        id_scheme: IdScheme,
    ) -> Self {
        Self {
            engine: DrawEngine::new(catalog),
            interpreter,
            store,
            id_scheme,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    /// Run the full pipeline and persist the result.
    ///
    /// Nothing is returned unless the reading was saved.
    pub async fn create(&self, request: &ReadingRequest) -> Result<Reading> {
        let spread = self.catalog().resolve(&request.spread_type)?;

        if request.options.is_customised() {
            tracing::debug!(
                deck_type = %request.options.deck_type,
                interpretation_style = %request.options.interpretation_style,
                birth_info = request.options.user_birth_info.is_some(),
                "Ignoring reading options with no effect"
            );
        }

        let cards_drawn = self
            .engine
            .draw(spread.card_count, request.include_reversed);

        let interpretation = self
            .interpreter
            .interpret(&cards_drawn, request.question.as_deref(), spread)
            .await;

        let now = Utc::now();
        let reading = Reading {
            spread_type: request.spread_type.clone(),
            question: request.question.clone(),
            cards_drawn,
            interpretation,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            reading_id: id::generate(self.id_scheme, now),
        };

        self.store.save(&reading).await?;

        Ok(reading)
    }

    pub async fn load(&self, reading_id: &str) -> Result<Reading> {
        self.store.load(reading_id).await
    }
}
