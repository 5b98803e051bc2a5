//! The read surface handed to the presentation layer.

use crate::{
    bracket::IncomeBracket,
    dataset::ImpactDataset,
    error::QueryResult,
    palette::PartyPalette,
    ranking::{rank_impacts, ChartRecord, Metric},
    tables::PartyImpacts,
    types::{PartyId, Percent},
};
use std::sync::Arc;

/// Dataset plus palette. Cloning is cheap; clones share both tables.
#[derive(Debug, Clone)]
pub struct ImpactQuery {
    dataset: Arc<ImpactDataset>,
    palette: Arc<PartyPalette>,
}

impl ImpactQuery {
    pub fn new(dataset: Arc<ImpactDataset>, palette: Arc<PartyPalette>) -> Self {
        Self { dataset, palette }
    }

    /// Reference dataset with the reference party palette.
    pub fn reference() -> Self {
        Self::new(ImpactDataset::reference(), Arc::new(PartyPalette::reference()))
    }

    pub fn dataset(&self) -> &ImpactDataset {
        &self.dataset
    }

    pub fn palette(&self) -> &PartyPalette {
        &self.palette
    }

    pub fn list_brackets(&self) -> &[IncomeBracket] {
        self.dataset.list_brackets()
    }

    pub fn parties(&self) -> &[PartyId] {
        self.dataset.parties()
    }

    pub fn get_impacts(&self, bracket: &str) -> QueryResult<&PartyImpacts> {
        self.dataset.get_impacts(bracket)
    }

    pub fn get_poverty_risk(&self, party: &str) -> QueryResult<Percent> {
        self.dataset.get_poverty_risk(party)
    }

    /// Chart records for `bracket`, ranked by `metric`, highest first.
    pub fn rank(&self, bracket: &str, metric: Metric) -> QueryResult<Vec<ChartRecord>> {
        let row = self.dataset.get_impacts(bracket)?;
        let records = rank_impacts(row, metric, &self.palette);
        log::debug!(
            "ranked {} parties for bracket={bracket} metric={metric:?}, top={:?}",
            records.len(),
            records.first().map(|r| r.party.as_str())
        );
        Ok(records)
    }
}
