//! Interpretation strategies
//!
//! A strategy turns a draw into prose. The [`Interpreter`] runs the
//! configured strategy under a timeout and falls back to the
//! [`TemplateFormatter`] whenever it fails, stalls, or returns nothing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{InterpretationSection, StrategyKind};
use crate::types::{DrawnCard, Spread};
use crate::Result;

pub mod template;

pub use template::TemplateFormatter;

/// Pluggable interpretation backend
#[async_trait]
pub trait InterpretationStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce interpretation text for a draw
    async fn interpret(
        &self,
        drawn: &[DrawnCard],
        question: Option<&str>,
        spread: &Spread,
    ) -> Result<String>;
}

/// Runs a strategy with a bounded wait and a template fallback
#[derive(Clone)]
pub struct Interpreter {
    strategy: Arc<dyn InterpretationStrategy>,
    fallback: TemplateFormatter,
    timeout: Duration,
}

impl Interpreter {
    pub fn new(strategy: Arc<dyn InterpretationStrategy>, timeout: Duration) -> Self {
        Self {
            strategy,
            fallback: TemplateFormatter::new(),
            timeout,
        }
    }

    /// Template-only interpreter with the default interpretation timeout
    pub fn template() -> Self {
        let timeout = Duration::from_secs(InterpretationSection::default().timeout_secs);
        Self::new(Arc::new(TemplateFormatter::new()), timeout)
    }

    pub fn from_config(config: &InterpretationSection) -> Self {
        let strategy: Arc<dyn InterpretationStrategy> = match config.strategy {
            StrategyKind::Template => Arc::new(TemplateFormatter::new()),
        };
        Self::new(strategy, Duration::from_secs(config.timeout_secs))
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Interpret a draw. Never fails: any strategy problem yields the template text.
    pub async fn interpret(
        &self,
        drawn: &[DrawnCard],
        question: Option<&str>,
        spread: &Spread,
    ) -> String {
        let strategy = self.strategy.name();

        match tokio::time::timeout(
            self.timeout,
            self.strategy.interpret(drawn, question, spread),
        )
        .await
        {
            Ok(Ok(text)) if !text.trim().is_empty() => return text,
            Ok(Ok(_)) => {
                tracing::warn!(strategy, "Interpretation strategy returned empty text");
            }
            Ok(Err(err)) => {
                tracing::warn!(strategy, error = %err, "Interpretation strategy failed");
            }
            Err(_) => {
                tracing::warn!(
                    strategy,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Interpretation strategy timed out"
                );
            }
        }

        self.fallback.format(drawn, question, spread)
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("strategy", &self.strategy.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Card;
    use crate::Error;

    struct Fixed(&'static str);

    #[async_trait]
    impl InterpretationStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn interpret(&self, _: &[DrawnCard], _: Option<&str>, _: &Spread) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl InterpretationStrategy for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn interpret(&self, _: &[DrawnCard], _: Option<&str>, _: &Spread) -> Result<String> {
            Err(Error::interpretation("service unavailable"))
        }
    }

    struct Stalled;

    #[async_trait]
    impl InterpretationStrategy for Stalled {
        fn name(&self) -> &'static str {
            "stalled"
        }

        async fn interpret(&self, _: &[DrawnCard], _: Option<&str>, _: &Spread) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok("too late".to_string())
        }
    }

    fn draw() -> (Vec<DrawnCard>, Spread) {
        let card = Card {
            name: "The Star".to_string(),
            number: Some(17),
            suit: None,
            element: Some("Air".to_string()),
            meaning_upright: "Hope".to_string(),
            meaning_reversed: "Despair".to_string(),
            golden_dawn_correspondence: "Path of Tzaddi".to_string(),
            hebrew_letter: Some("Tzaddi".to_string()),
            astrological_correspondence: Some("Aquarius".to_string()),
            tree_of_life_path: Some(28),
        };
        let spread = Spread::new("Single Card", &["Guidance"], "one card");
        (vec![DrawnCard::new(card, false)], spread)
    }

    #[tokio::test]
    async fn uses_strategy_output() {
        let (drawn, spread) = draw();
        let interpreter = Interpreter::new(Arc::new(Fixed("custom text")), Duration::from_secs(1));
        let text = interpreter.interpret(&drawn, None, &spread).await;
        assert_eq!(text, "custom text");
    }

    #[tokio::test]
    async fn falls_back_on_error() {
        let (drawn, spread) = draw();
        let interpreter = Interpreter::new(Arc::new(Failing), Duration::from_secs(1));
        let text = interpreter.interpret(&drawn, Some("q"), &spread).await;
        assert_eq!(text, TemplateFormatter.format(&drawn, Some("q"), &spread));
    }

    #[tokio::test]
    async fn falls_back_on_empty_text() {
        let (drawn, spread) = draw();
        let interpreter = Interpreter::new(Arc::new(Fixed("  \n")), Duration::from_secs(1));
        let text = interpreter.interpret(&drawn, None, &spread).await;
        assert!(text.starts_with("Reading for: General guidance"));
    }

    #[tokio::test]
    async fn falls_back_on_timeout() {
        let (drawn, spread) = draw();
        let interpreter = Interpreter::new(Arc::new(Stalled), Duration::from_millis(20));
        let text = interpreter.interpret(&drawn, None, &spread).await;
        assert!(text.contains("Guidance: The Star (Upright)"));
    }

    #[test]
    fn config_selects_template() {
        let interpreter = Interpreter::from_config(&InterpretationSection::default());
        assert_eq!(interpreter.strategy_name(), "template");
    }

    #[test]
    fn template_uses_default_timeout() {
        let defaults = InterpretationSection::default();
        assert_eq!(
            Interpreter::template().timeout(),
            Duration::from_secs(defaults.timeout_secs)
        );
        assert_eq!(
            Interpreter::template().timeout(),
            Interpreter::from_config(&defaults).timeout()
        );
    }
}
