//! The static lookup tables: bracket → party → impact, and party → poverty risk.
//!
//! RULE: Tables are built once and never mutated afterwards.
//! Every per-bracket row lists its parties in the canonical party order,
//! so iteration order is part of the data, not an accident of hashing.

use crate::{
    bracket::IncomeBracket,
    error::{QueryError, QueryResult},
    types::{BracketLabel, Euros, PartyId, Percent},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Projected year-over-year change in disposable income for one
/// (bracket, party) pair. Positive = income increase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PartyImpactValue {
    pub percentage: Percent,
    pub absolute:   Euros,
}

/// One bracket's row: every party's impact, in canonical party order.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyImpacts {
    entries: Vec<(PartyId, PartyImpactValue)>,
}

impl PartyImpacts {
    pub(crate) fn new(entries: Vec<(PartyId, PartyImpactValue)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, party: &str) -> Option<&PartyImpactValue> {
        self.entries
            .iter()
            .find(|(id, _)| id == party)
            .map(|(_, value)| value)
    }

    /// Iterate in canonical party order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PartyImpactValue)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn parties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bracket label → [`PartyImpacts`].
#[derive(Debug, Clone)]
pub struct ImpactTable {
    parties:  Vec<PartyId>,
    brackets: Vec<IncomeBracket>,
    /// Parallel to `brackets`.
    rows:     Vec<PartyImpacts>,
    index:    HashMap<BracketLabel, usize>,
}

impl ImpactTable {
    /// Build a table from brackets (ascending) and per-bracket party maps.
    /// Rows are reordered into `parties` order; every row must carry
    /// exactly that party set.
    pub fn new(
        parties: Vec<PartyId>,
        brackets: Vec<IncomeBracket>,
        mut rows: HashMap<BracketLabel, HashMap<PartyId, PartyImpactValue>>,
    ) -> QueryResult<Self> {
        let mut ordered = Vec::with_capacity(brackets.len());
        let mut index: HashMap<BracketLabel, usize> = HashMap::with_capacity(brackets.len());

        for bracket in &brackets {
            if index.contains_key(&bracket.label) {
                return Err(QueryError::invalid_dataset(format!(
                    "duplicate bracket label '{}'",
                    bracket.label
                )));
            }
            let Some(mut row) = rows.remove(&bracket.label) else {
                return Err(QueryError::invalid_dataset(format!(
                    "bracket '{}' has no impact entries",
                    bracket.label
                )));
            };

            let mut entries = Vec::with_capacity(parties.len());
            for party in &parties {
                let value = row.remove(party).ok_or_else(|| {
                    QueryError::invalid_dataset(format!(
                        "bracket '{}' is missing party '{party}'",
                        bracket.label
                    ))
                })?;
                entries.push((party.clone(), value));
            }
            if let Some(extra) = row.keys().next() {
                return Err(QueryError::invalid_dataset(format!(
                    "bracket '{}' lists unknown party '{extra}'",
                    bracket.label
                )));
            }

            index.insert(bracket.label.clone(), ordered.len());
            ordered.push(PartyImpacts::new(entries));
        }

        if let Some(orphan) = rows.keys().next() {
            return Err(QueryError::invalid_dataset(format!(
                "impact entries for undeclared bracket '{orphan}'"
            )));
        }

        Ok(Self { parties, brackets, rows: ordered, index })
    }

    /// Brackets in ascending income order.
    pub fn brackets(&self) -> &[IncomeBracket] {
        &self.brackets
    }

    /// The canonical party order shared by every row.
    pub fn parties(&self) -> &[PartyId] {
        &self.parties
    }

    pub fn contains_bracket(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn impacts(&self, label: &str) -> QueryResult<&PartyImpacts> {
        self.index
            .get(label)
            .map(|&i| &self.rows[i])
            .ok_or_else(|| QueryError::UnknownBracket { label: label.to_string() })
    }

    /// Every bracket with its row, in ascending income order.
    pub fn rows(&self) -> impl Iterator<Item = (&IncomeBracket, &PartyImpacts)> {
        self.brackets.iter().zip(&self.rows)
    }
}

/// Party → projected change of the national poverty-risk rate, in percent.
/// Independent of bracket.
#[derive(Debug, Clone)]
pub struct PovertyRiskTable {
    deltas: HashMap<PartyId, Percent>,
}

impl PovertyRiskTable {
    pub fn new(deltas: HashMap<PartyId, Percent>) -> Self {
        Self { deltas }
    }

    pub fn contains_party(&self, party: &str) -> bool {
        self.deltas.contains_key(party)
    }

    pub fn delta(&self, party: &str) -> QueryResult<Percent> {
        self.deltas
            .get(party)
            .copied()
            .ok_or_else(|| QueryError::UnknownParty { party: party.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Percent)> {
        self.deltas.iter().map(|(party, &delta)| (party.as_str(), delta))
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}
