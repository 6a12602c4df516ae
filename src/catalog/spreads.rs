//! Built-in spreads

use crate::types::Spread;

/// Registered spreads as `(id, spread)`, in listing order
pub fn builtin() -> Vec<(String, Spread)> {
    vec![
        (
            "single_card".to_string(),
            Spread::new(
                "Single Card",
                &["Guidance"],
                "Simple single-card draw for quick guidance",
            ),
        ),
        (
            "three_card".to_string(),
            Spread::new(
                "Past, Present, Future",
                &["Past/Foundation", "Present/Challenge", "Future/Outcome"],
                "Simple three-card spread for quick insight",
            ),
        ),
        (
            "celtic_cross".to_string(),
            Spread::new(
                "Celtic Cross",
                &[
                    "Present Situation",
                    "Challenge/Cross",
                    "Distant Past/Foundation",
                    "Recent Past",
                    "Crown/Possible Outcome",
                    "Immediate Future",
                    "Your Approach",
                    "External Influences",
                    "Hopes and Fears",
                    "Final Outcome",
                ],
                "The most comprehensive spread, exploring all aspects of your situation",
            ),
        ),
        (
            "tree_of_life".to_string(),
            Spread::new(
                "Tree of Life",
                &[
                    "Kether (Crown)",
                    "Chokmah (Wisdom)",
                    "Binah (Understanding)",
                    "Chesed (Mercy)",
                    "Geburah (Severity)",
                    "Tiphareth (Beauty)",
                    "Netzach (Victory)",
                    "Hod (Glory)",
                    "Yesod (Foundation)",
                    "Malkuth (Kingdom)",
                ],
                "Based on the Kabbalistic Tree of Life, providing deep spiritual insight",
            ),
        ),
        (
            "golden_dawn".to_string(),
            Spread::new(
                "Golden Dawn Temple",
                &[
                    "Present Situation",
                    "Hidden Influences",
                    "Past Foundations",
                    "Future Possibilities",
                    "Higher Guidance",
                    "Practical Action",
                    "Inner Wisdom",
                    "External Forces",
                    "Final Outcome",
                ],
                "Sacred 9-card Golden Dawn spread using all available cards",
            ),
        ),
        (
            "seven_pointed_star".to_string(),
            Spread::new(
                "Seven-Pointed Star",
                &[
                    "Self",
                    "Past",
                    "Future",
                    "Hidden Influences",
                    "External Forces",
                    "Hopes/Fears",
                    "Final Outcome",
                ],
                "Mystical 7-card spread for deep spiritual insight",
            ),
        ),
    ]
}
