//! The built-in reference dataset: ten household-income brackets, seven
//! parties, snapshot figures for the federal election of 23.02.2025.
//!
//! The figures are an opaque input. Nothing here derives or checks them.

use crate::{
    bracket::{IncomeBound, IncomeBracket},
    dataset::ImpactDataset,
    error::QueryResult,
    tables::{ImpactTable, PartyImpactValue, PovertyRiskTable},
};
use std::collections::HashMap;

/// Canonical party order. Ranking ties keep this order.
pub const PARTY_ORDER: [&str; 7] = ["SPD", "CDU", "Grüne", "FDP", "AfD", "Linke", "BSW"];

/// (label, min, max): `None` marks the unbounded top bracket.
const BRACKETS: [(&str, u64, Option<u64>); 10] = [
    ("1-10k",    0,       Some(10_000)),
    ("10-20k",   10_001,  Some(20_000)),
    ("20-30k",   20_001,  Some(30_000)),
    ("30-40k",   30_001,  Some(40_000)),
    ("40-55k",   40_001,  Some(55_000)),
    ("55-80k",   55_001,  Some(80_000)),
    ("80-100k",  80_001,  Some(100_000)),
    ("100-150k", 100_001, Some(150_000)),
    ("150-250k", 150_001, Some(250_000)),
    ("250k+",    250_001, None),
];

/// Per bracket, (percentage, absolute €) for each party in [`PARTY_ORDER`].
const IMPACTS: [(&str, [(f64, i64); 7]); 10] = [
    //             SPD            CDU             Grüne           FDP              AfD           Linke             BSW
    ("1-10k",    [(1.9, 268),   (0.1, 11),      (0.9, 119),     (-2.1, -289),    (0.0, 1000), (29.7, 4125),     (0.5, 75)]),
    ("10-20k",   [(2.4, 373),   (0.1, 13),      (2.8, 437),     (-0.2, -36),     (0.2, 1000), (12.4, 1936),     (1.4, 224)]),
    ("20-30k",   [(3.1, 682),   (0.3, 63),      (3.9, 846),     (1.4, 292),      (1.1, 1000), (8.5, 1846),      (3.0, 654)]),
    ("30-40k",   [(2.8, 795),   (0.6, 176),     (3.6, 1033),    (2.3, 663),      (1.7, 1000), (6.4, 1840),      (2.8, 820)]),
    ("40-55k",   [(2.5, 926),   (1.1, 414),     (3.1, 1140),    (3.7, 1379),     (2.8, 1000), (6.4, 2378),      (2.9, 1083)]),
    ("55-80k",   [(2.6, 1281),  (1.8, 907),     (2.1, 1055),    (5.5, 2758),     (4.9, 1000), (6.7, 3316),      (3.0, 1474)]),
    ("80-100k",  [(2.3, 1438),  (2.4, 1528),    (1.4, 867),     (6.8, 4378),     (6.1, 1000), (5.5, 3500),      (2.3, 1482)]),
    ("100-150k", [(1.7, 1360),  (3.2, 2587),    (0.7, 585),     (8.2, 6734),     (6.7, 1000), (2.7, 2189),      (1.3, 1033)]),
    ("150-250k", [(1.0, 1179),  (4.4, 5203),    (-0.1, -122),   (9.8, 11543),    (7.7, 1000), (-3.0, -3547),    (0.1, 107)]),
    ("250k+",    [(-3.4, -8892), (5.1, 13248),  (-3.8, -9833),  (8.1, 21083),    (7.7, 1000), (-27.0, -70679),  (-2.2, -5767)]),
];

const POVERTY_RISK: [(&str, f64); 7] = [
    ("SPD",   0.5),
    ("CDU",   2.9),
    ("Grüne", -5.0),
    ("FDP",   11.0),
    ("AfD",   12.9),
    ("Linke", -15.9),
    ("BSW",   4.2),
];

pub(crate) fn build() -> QueryResult<ImpactDataset> {
    let parties = PARTY_ORDER.iter().map(|p| p.to_string()).collect();

    let brackets = BRACKETS
        .iter()
        .map(|&(label, min, max)| IncomeBracket::new(min, IncomeBound::from(max), label))
        .collect();

    let rows = IMPACTS
        .iter()
        .map(|(label, values)| {
            let row = PARTY_ORDER
                .iter()
                .zip(values)
                .map(|(party, &(percentage, absolute))| {
                    (party.to_string(), PartyImpactValue { percentage, absolute })
                })
                .collect::<HashMap<_, _>>();
            (label.to_string(), row)
        })
        .collect();

    let poverty = POVERTY_RISK
        .iter()
        .map(|&(party, delta)| (party.to_string(), delta))
        .collect();

    ImpactDataset::new(
        ImpactTable::new(parties, brackets, rows)?,
        PovertyRiskTable::new(poverty),
    )
}
