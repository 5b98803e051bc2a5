//! Party presentation metadata: display label and color token.
//!
//! Kept apart from the impact data. Nothing in here feeds ranking;
//! the color is carried through to chart records for the renderer.

use crate::types::PartyId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token used for a party the palette does not know.
pub const NEUTRAL_COLOR: &str = "hsl(0, 0%, 60%)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartyStyle {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct PartyPalette {
    styles: HashMap<PartyId, PartyStyle>,
}

impl PartyPalette {
    pub fn new(styles: HashMap<PartyId, PartyStyle>) -> Self {
        Self { styles }
    }

    /// Colors and labels for the seven reference parties.
    pub fn reference() -> Self {
        let entries = [
            ("SPD",   "SPD",        "hsl(357, 100%, 45%)"),
            ("CDU",   "CDU",        "hsl(0, 0%, 0%)"),
            ("Grüne", "Die Grünen", "hsl(104, 57%, 38%)"),
            ("FDP",   "FDP",        "hsl(56, 100%, 50%)"),
            ("AfD",   "AfD",        "hsl(201, 100%, 44%)"),
            ("Linke", "Die Linke",  "hsl(333, 70%, 50%)"),
            ("BSW",   "BSW",        "hsl(30, 80%, 55%)"),
        ];
        let styles = entries
            .into_iter()
            .map(|(party, label, color)| {
                (
                    party.to_string(),
                    PartyStyle { label: label.to_string(), color: color.to_string() },
                )
            })
            .collect();
        Self { styles }
    }

    pub fn style(&self, party: &str) -> Option<&PartyStyle> {
        self.styles.get(party)
    }

    /// Color token for `party`, or [`NEUTRAL_COLOR`] if it has no style.
    pub fn color(&self, party: &str) -> &str {
        match self.styles.get(party) {
            Some(style) => &style.color,
            None => {
                log::warn!("no palette entry for party '{party}', using neutral color");
                NEUTRAL_COLOR
            }
        }
    }

    /// Display label for `party`, falling back to the identifier itself.
    pub fn label<'a>(&'a self, party: &'a str) -> &'a str {
        self.styles.get(party).map_or(party, |s| s.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_labels_use_full_party_names() {
        let palette = PartyPalette::reference();
        assert_eq!(palette.label("Grüne"), "Die Grünen");
        assert_eq!(palette.label("Linke"), "Die Linke");
        assert_eq!(palette.label("SPD"), "SPD");
    }

    #[test]
    fn unknown_party_falls_back() {
        let palette = PartyPalette::reference();
        assert_eq!(palette.label("Piraten"), "Piraten");
        assert_eq!(palette.color("Piraten"), NEUTRAL_COLOR);
    }
}
