//! Template interpretation

use async_trait::async_trait;

use super::InterpretationStrategy;
use crate::types::{DrawnCard, Spread};
use crate::Result;

/// Header subject used when no question was asked
pub const DEFAULT_SUBJECT: &str = "General guidance";

const CLOSING: &str = "This reading suggests a journey through the archetypes and energies \
represented by these sacred symbols. Consider how each card's energy applies to your current \
situation and the guidance it offers for your path forward.";

/// Renders a reading from a fixed text template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFormatter;

impl TemplateFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the interpretation text. Output depends only on the arguments.
    pub fn format(&self, drawn: &[DrawnCard], question: Option<&str>, spread: &Spread) -> String {
        let subject = question
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_SUBJECT);

        let mut text = format!("Reading for: {}\n\n", subject);

        for (i, drawn_card) in drawn.iter().enumerate() {
            let card = &drawn_card.card;
            text.push_str(&format!(
                "\n{}: {} ({})\n{}\nGolden Dawn: {}\n\n",
                spread.position_label(i),
                card.name,
                drawn_card.orientation,
                drawn_card.meaning,
                card.golden_dawn_correspondence,
            ));
        }

        text.push('\n');
        text.push_str(CLOSING);

        text.trim().to_string()
    }
}

#[async_trait]
impl InterpretationStrategy for TemplateFormatter {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn interpret(
        &self,
        drawn: &[DrawnCard],
        question: Option<&str>,
        spread: &Spread,
    ) -> Result<String> {
        Ok(self.format(drawn, question, spread))
    }
}
