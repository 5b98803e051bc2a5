//! The validated, immutable dataset behind every query.
//!
//! RULE: An ImpactDataset is read-only once constructed.
//! Sessions share it through `Arc`; no writer exists after construction,
//! so concurrent readers need no synchronization.

use crate::{
    bracket::{check_contiguous, IncomeBracket},
    error::{QueryError, QueryResult},
    reference,
    tables::{ImpactTable, PartyImpacts, PovertyRiskTable},
    types::{PartyId, Percent},
};
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

static REFERENCE: LazyLock<Arc<ImpactDataset>> = LazyLock::new(|| {
    let dataset = reference::build().expect("built-in reference dataset is well-formed");
    log::debug!(
        "reference dataset ready: {} brackets, {} parties",
        dataset.list_brackets().len(),
        dataset.parties().len()
    );
    Arc::new(dataset)
});

#[derive(Debug, Clone)]
pub struct ImpactDataset {
    impacts: ImpactTable,
    poverty: PovertyRiskTable,
}

impl ImpactDataset {
    /// Combine the two tables, checking the cross-table invariants:
    /// brackets are contiguous and exhaustive, the canonical party list
    /// has no duplicates, and the poverty-risk table covers exactly the
    /// same parties as the impact table.
    pub fn new(impacts: ImpactTable, poverty: PovertyRiskTable) -> QueryResult<Self> {
        check_contiguous(impacts.brackets()).map_err(QueryError::invalid_dataset)?;

        let mut seen = HashSet::with_capacity(impacts.parties().len());
        for party in impacts.parties() {
            if !seen.insert(party.as_str()) {
                return Err(QueryError::invalid_dataset(format!("duplicate party '{party}'")));
            }
            if !poverty.contains_party(party) {
                return Err(QueryError::invalid_dataset(format!(
                    "party '{party}' has no poverty-risk entry"
                )));
            }
        }
        if poverty.len() != impacts.parties().len() {
            return Err(QueryError::invalid_dataset(
                "poverty-risk table lists parties absent from the impact table",
            ));
        }

        Ok(Self { impacts, poverty })
    }

    /// The built-in dataset, shared process-wide.
    pub fn reference() -> Arc<ImpactDataset> {
        Arc::clone(&REFERENCE)
    }

    /// All brackets in ascending income order.
    pub fn list_brackets(&self) -> &[IncomeBracket] {
        self.impacts.brackets()
    }

    /// The stored per-party row for `bracket`. Borrowed: callers that need
    /// to change it must clone.
    pub fn get_impacts(&self, bracket: &str) -> QueryResult<&PartyImpacts> {
        self.impacts.impacts(bracket)
    }

    /// Every bracket with its stored row, in ascending income order.
    pub fn rows(&self) -> impl Iterator<Item = (&IncomeBracket, &PartyImpacts)> {
        self.impacts.rows()
    }

    /// Every (party, poverty-risk delta) pair, unordered.
    pub fn poverty_risks(&self) -> impl Iterator<Item = (&str, Percent)> {
        self.poverty.iter()
    }

    pub fn get_poverty_risk(&self, party: &str) -> QueryResult<Percent> {
        self.poverty.delta(party)
    }

    /// Canonical party order.
    pub fn parties(&self) -> &[PartyId] {
        self.impacts.parties()
    }

    pub fn contains_bracket(&self, label: &str) -> bool {
        self.impacts.contains_bracket(label)
    }

    pub fn contains_party(&self, party: &str) -> bool {
        self.poverty.contains_party(party)
    }

    /// The bracket a household income falls into. Brackets are exhaustive,
    /// so every income has one.
    pub fn bracket_for_income(&self, income: u64) -> Option<&IncomeBracket> {
        self.list_brackets().iter().find(|b| b.contains(income))
    }
}
