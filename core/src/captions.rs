//! German caption text for the chart, its tooltip and the poverty-risk
//! indicator. Pure string building; no layout.

use crate::{
    palette::PartyPalette,
    ranking::{ChartRecord, Metric},
    types::{PartyId, Percent},
};
use serde::{Deserialize, Serialize};

/// Election date the dataset's projections refer to.
pub const ELECTION_DATE: &str = "23.02.2025";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Rises,
    Falls,
    Unchanged,
}

impl Direction {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Rises
        } else if value < 0.0 {
            Self::Falls
        } else {
            Self::Unchanged
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Self::Rises     => "steigt",
            Self::Falls     => "sinkt",
            Self::Unchanged => "bleibt unverändert",
        }
    }
}

/// Whether a poverty-risk change is bad news (red) or not (green).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Adverse,
    Favourable,
}

pub fn axis_caption(metric: Metric) -> String {
    format!("Veränderung im verfügbaren Einkommen in {}", metric.unit())
}

pub fn metric_toggle_label(metric: Metric) -> &'static str {
    match metric {
        Metric::Absolute   => "Absolute Werte (€)",
        Metric::Percentage => "Prozentuale Änderung (%)",
    }
}

/// Tooltip text for one bar.
pub fn impact_sentence(record: &ChartRecord, metric: Metric) -> String {
    let direction = Direction::of(record.value);
    let change = match direction {
        Direction::Unchanged => direction.verb().to_string(),
        _ => format!("{} um {} {}", direction.verb(), record.value.abs(), metric.unit()),
    };
    format!(
        "Ihr durchschnittliches verfügbares Jahreseinkommen {change}, wenn Sie bei der \
         Bundestagswahl am {ELECTION_DATE} die {} wählen.",
        record.party
    )
}

/// The supplementary panel shown while a party is hovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PovertyIndicator {
    pub party:     PartyId,
    pub label:     String,
    pub delta:     Percent,
    pub direction: Direction,
    pub tone:      Tone,
    pub headline:  String,
}

impl PovertyIndicator {
    pub fn new(party: &str, delta: Percent, palette: &PartyPalette) -> Self {
        let label = palette.label(party).to_string();
        let direction = Direction::of(delta);
        let tone = if delta > 0.0 { Tone::Adverse } else { Tone::Favourable };
        let change = match direction {
            Direction::Unchanged => direction.verb().to_string(),
            _ => format!("{} um {}%", direction.verb(), delta.abs()),
        };
        let headline = format!("Das Armutsrisiko in Deutschland durch Wahl von {label}: {change}");
        Self {
            party: party.to_string(),
            label,
            delta,
            direction,
            tone,
            headline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(party: &str, value: f64) -> ChartRecord {
        ChartRecord { party: party.into(), value, color: String::new() }
    }

    #[test]
    fn axis_caption_names_unit() {
        assert_eq!(axis_caption(Metric::Absolute), "Veränderung im verfügbaren Einkommen in €");
        assert_eq!(axis_caption(Metric::Percentage), "Veränderung im verfügbaren Einkommen in %");
    }

    #[test]
    fn impact_sentence_uses_magnitude_and_verb() {
        let up = impact_sentence(&record("Linke", 4125.0), Metric::Absolute);
        assert!(up.contains("steigt um 4125 €"), "{up}");

        let down = impact_sentence(&record("FDP", -2.1), Metric::Percentage);
        assert!(down.contains("sinkt um 2.1 %"), "{down}");
        assert!(down.contains("die FDP wählen"), "{down}");
    }

    #[test]
    fn zero_impact_reads_unchanged() {
        let flat = impact_sentence(&record("AfD", 0.0), Metric::Percentage);
        assert!(flat.contains("bleibt unverändert"), "{flat}");
        assert!(!flat.contains("sinkt"), "{flat}");
    }

    #[test]
    fn poverty_indicator_tone_follows_sign() {
        let palette = PartyPalette::reference();
        let afd = PovertyIndicator::new("AfD", 12.9, &palette);
        assert_eq!(afd.tone, Tone::Adverse);
        assert!(afd.headline.ends_with("AfD: steigt um 12.9%"), "{}", afd.headline);

        let gruene = PovertyIndicator::new("Grüne", -5.0, &palette);
        assert_eq!(gruene.tone, Tone::Favourable);
        assert_eq!(gruene.direction, Direction::Falls);
        assert!(gruene.headline.ends_with("Die Grünen: sinkt um 5%"), "{}", gruene.headline);
    }
}
