//! Ranking: turns one bracket's row into ordered chart records.
//!
//! RULES:
//!   - Sort is descending by the selected metric and stable.
//!   - Ties keep the row's canonical party order. No random tie-break.
//!   - Exactly the row's parties come out: none dropped, none added.

use crate::{
    palette::PartyPalette,
    tables::{PartyImpactValue, PartyImpacts},
    types::PartyId,
};
use serde::{Deserialize, Serialize};

/// The unit parties are compared in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Whole € per year.
    #[default]
    Absolute,
    /// Percent of disposable income.
    Percentage,
}

impl Metric {
    /// The compared value. `-0.0` comes back as `0.0` so that both zeros
    /// tie under the sort's total order.
    pub fn select(self, impact: &PartyImpactValue) -> f64 {
        match self {
            Self::Absolute   => impact.absolute as f64,
            Self::Percentage => impact.percentage + 0.0,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Absolute   => "€",
            Self::Percentage => "%",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "absolute" | "abs" | "eur" => Ok(Self::Absolute),
            "percentage" | "pct" | "percent" => Ok(Self::Percentage),
            other => Err(format!("unknown metric '{other}'")),
        }
    }
}

/// One bar of the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartRecord {
    pub party: PartyId,
    pub value: f64,
    pub color: String,
}

/// Rank every party in `row` by `metric`, highest first.
pub fn rank_impacts(row: &PartyImpacts, metric: Metric, palette: &PartyPalette) -> Vec<ChartRecord> {
    let mut records: Vec<ChartRecord> = row
        .iter()
        .map(|(party, impact)| ChartRecord {
            party: party.to_string(),
            value: metric.select(impact),
            color: palette.color(party).to_string(),
        })
        .collect();

    // sort_by is stable; total_cmp keeps the order total for any f64.
    records.sort_by(|a, b| b.value.total_cmp(&a.value));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[(&str, f64, i64)]) -> PartyImpacts {
        PartyImpacts::new(
            values
                .iter()
                .map(|&(p, percentage, absolute)| {
                    (p.to_string(), PartyImpactValue { percentage, absolute })
                })
                .collect(),
        )
    }

    #[test]
    fn ties_keep_row_order() {
        let row = row(&[("A", 1.0, 500), ("B", 2.0, 500), ("C", 3.0, 500)]);
        let ranked = rank_impacts(&row, Metric::Absolute, &PartyPalette::default());
        let order: Vec<_> = ranked.iter().map(|r| r.party.as_str()).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn signed_zeros_tie_in_row_order() {
        let row = row(&[("A", -0.0, 0), ("B", 0.0, 0)]);
        let ranked = rank_impacts(&row, Metric::Percentage, &PartyPalette::default());
        let order: Vec<_> = ranked.iter().map(|r| r.party.as_str()).collect();
        assert_eq!(order, ["A", "B"]);
        assert!(
            ranked.iter().all(|r| r.value.is_sign_positive()),
            "zero values should be unsigned: {ranked:?}"
        );
    }

    #[test]
    fn metric_switch_reorders() {
        let row = row(&[("A", 1.0, 900), ("B", 2.0, 100)]);
        let palette = PartyPalette::default();
        assert_eq!(rank_impacts(&row, Metric::Absolute, &palette)[0].party, "A");
        assert_eq!(rank_impacts(&row, Metric::Percentage, &palette)[0].party, "B");
    }

    #[test]
    fn metric_parses_from_cli_words() {
        assert_eq!("absolute".parse::<Metric>(), Ok(Metric::Absolute));
        assert_eq!("Percentage".parse::<Metric>(), Ok(Metric::Percentage));
        assert!("median".parse::<Metric>().is_err());
    }
}
