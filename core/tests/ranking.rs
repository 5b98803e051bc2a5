//! Ranking tests: ordering, completeness and determinism of chart records.

use std::collections::HashSet;
use verteilomat_core::{
    query::ImpactQuery,
    ranking::{ChartRecord, Metric},
    PARTY_ORDER,
};

const METRICS: [Metric; 2] = [Metric::Absolute, Metric::Percentage];

fn parties(records: &[ChartRecord]) -> Vec<&str> {
    records.iter().map(|r| r.party.as_str()).collect()
}

#[test]
fn every_bracket_ranks_exactly_its_parties() {
    let query = ImpactQuery::reference();

    for bracket in query.list_brackets() {
        let expected: HashSet<&str> = query.get_impacts(&bracket.label).unwrap().parties().collect();

        for metric in METRICS {
            let ranked = query.rank(&bracket.label, metric).unwrap();
            let got: HashSet<&str> = ranked.iter().map(|r| r.party.as_str()).collect();

            assert_eq!(
                ranked.len(), expected.len(),
                "{} / {metric:?}: duplicate or missing parties: {:?}",
                bracket.label, parties(&ranked)
            );
            assert_eq!(got, expected, "{} / {metric:?}: party set differs", bracket.label);
        }
    }
}

#[test]
fn every_ranking_is_non_increasing() {
    let query = ImpactQuery::reference();

    for bracket in query.list_brackets() {
        for metric in METRICS {
            let ranked = query.rank(&bracket.label, metric).unwrap();
            for pair in ranked.windows(2) {
                assert!(
                    pair[0].value >= pair[1].value,
                    "{} / {metric:?}: {} ({}) ranked above {} ({})",
                    bracket.label, pair[0].party, pair[0].value, pair[1].party, pair[1].value
                );
            }
        }
    }
}

#[test]
fn ranking_is_deterministic() {
    let query = ImpactQuery::reference();

    for bracket in query.list_brackets() {
        for metric in METRICS {
            let first = query.rank(&bracket.label, metric).unwrap();
            let second = query.rank(&bracket.label, metric).unwrap();
            assert_eq!(first, second, "{} / {metric:?} not reproducible", bracket.label);
        }
    }
}

/// SPD and BSW share 2.8% in "30-40k" and 2.3% in "80-100k".
#[test]
fn equal_values_keep_canonical_party_order() {
    let query = ImpactQuery::reference();
    let position = |p: &str| PARTY_ORDER.iter().position(|c| *c == p).unwrap();

    let mut ties_seen = 0;
    for bracket in query.list_brackets() {
        for metric in METRICS {
            let ranked = query.rank(&bracket.label, metric).unwrap();
            for pair in ranked.windows(2) {
                if pair[0].value == pair[1].value {
                    ties_seen += 1;
                    assert!(
                        position(&pair[0].party) < position(&pair[1].party),
                        "{} / {metric:?}: tie {} vs {} broke canonical order",
                        bracket.label, pair[0].party, pair[1].party
                    );
                }
            }
        }
    }
    assert!(ties_seen > 0, "reference data should contain at least one tie");
}

#[test]
fn lowest_bracket_absolute_starts_with_linke() {
    let ranked = ImpactQuery::reference().rank("1-10k", Metric::Absolute).unwrap();

    assert_eq!(ranked[0].party, "Linke");
    assert_eq!(ranked[0].value, 4125.0);

    let fdp = ranked.iter().find(|r| r.party == "FDP").expect("FDP ranked");
    assert_eq!(fdp.value, -289.0);
    assert_eq!(ranked.last().unwrap().party, "FDP", "the only negative value ranks last");
    assert_eq!(
        parties(&ranked),
        ["Linke", "AfD", "SPD", "Grüne", "BSW", "CDU", "FDP"]
    );
}

#[test]
fn top_bracket_percentage_starts_with_fdp_and_ends_with_linke() {
    let ranked = ImpactQuery::reference().rank("250k+", Metric::Percentage).unwrap();

    assert_eq!(ranked.first().unwrap().party, "FDP");
    assert_eq!(ranked.first().unwrap().value, 8.1);
    assert_eq!(ranked.last().unwrap().party, "Linke");
    assert_eq!(ranked.last().unwrap().value, -27.0);
    assert_eq!(
        parties(&ranked),
        ["FDP", "AfD", "CDU", "BSW", "SPD", "Grüne", "Linke"]
    );
}

#[test]
fn records_carry_palette_colors() {
    let query = ImpactQuery::reference();
    let ranked = query.rank("55-80k", Metric::Absolute).unwrap();

    for record in &ranked {
        let style = query.palette().style(&record.party).expect("reference party styled");
        assert_eq!(record.color, style.color);
    }
}

#[test]
fn unknown_bracket_is_rejected() {
    let err = ImpactQuery::reference().rank("0-1k", Metric::Absolute).unwrap_err();
    assert!(
        matches!(err, verteilomat_core::error::QueryError::UnknownBracket { ref label } if label == "0-1k"),
        "unexpected error: {err}"
    );
}
