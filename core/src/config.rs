//! Dataset files: the JSON form of an [`ImpactDataset`].
//!
//! The built-in reference data needs no file. A file replaces it wholesale
//! and goes through the same validation.

use crate::{
    bracket::{IncomeBound, IncomeBracket},
    dataset::ImpactDataset,
    error::QueryResult,
    tables::{ImpactTable, PartyImpactValue, PovertyRiskTable},
    types::{BracketLabel, PartyId, Percent},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    /// Canonical party order; ranking ties keep it.
    pub parties:      Vec<PartyId>,
    pub brackets:     Vec<BracketEntry>,
    pub poverty_risk: HashMap<PartyId, Percent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketEntry {
    pub label:      BracketLabel,
    pub min_income: u64,
    /// `null` for the unbounded top bracket.
    #[serde(default)]
    pub max_income: Option<u64>,
    pub impacts:    HashMap<PartyId, PartyImpactValue>,
}

impl DatasetFile {
    pub fn into_dataset(self) -> QueryResult<ImpactDataset> {
        let mut brackets = Vec::with_capacity(self.brackets.len());
        let mut rows = HashMap::with_capacity(self.brackets.len());
        for entry in self.brackets {
            brackets.push(IncomeBracket::new(
                entry.min_income,
                IncomeBound::from(entry.max_income),
                entry.label.clone(),
            ));
            // A repeated label is caught by ImpactTable::new via `brackets`.
            rows.insert(entry.label, entry.impacts);
        }

        ImpactDataset::new(
            ImpactTable::new(self.parties, brackets, rows)?,
            PovertyRiskTable::new(self.poverty_risk),
        )
    }
}

impl From<&ImpactDataset> for DatasetFile {
    fn from(dataset: &ImpactDataset) -> Self {
        let brackets = dataset
            .rows()
            .map(|(bracket, row)| BracketEntry {
                label:      bracket.label.clone(),
                min_income: bracket.min_income,
                max_income: bracket.max_income.as_option(),
                impacts:    row.iter().map(|(p, v)| (p.to_string(), *v)).collect(),
            })
            .collect();

        let poverty_risk = dataset
            .poverty_risks()
            .map(|(party, delta)| (party.to_string(), delta))
            .collect();

        Self {
            parties: dataset.parties().to_vec(),
            brackets,
            poverty_risk,
        }
    }
}

impl ImpactDataset {
    /// Parse and validate a dataset from its JSON text.
    pub fn from_json_str(json: &str) -> QueryResult<Self> {
        let file: DatasetFile = serde_json::from_str(json)?;
        file.into_dataset()
    }

    /// Load a dataset file from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let dataset = Self::from_json_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot load dataset {}: {e}", path.display()))?;
        log::info!(
            "loaded dataset {}: {} brackets, {} parties",
            path.display(),
            dataset.list_brackets().len(),
            dataset.parties().len()
        );
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> QueryResult<String> {
        Ok(serde_json::to_string_pretty(&DatasetFile::from(self))?)
    }
}
