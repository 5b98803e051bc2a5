//! Selection state: what one user currently has picked.
//!
//! RULES:
//!   - A failed transition leaves the state untouched.
//!   - Each transition changes only the field it names, except that the
//!     first bracket choice collapses the picker to its dropdown form.
//!   - Hover never influences ranking.

use crate::{
    dataset::ImpactDataset,
    error::{QueryError, QueryResult},
    ranking::Metric,
    types::{BracketLabel, PartyId},
};
use serde::{Deserialize, Serialize};

/// How the bracket picker is shown: the full grid until a bracket has
/// been chosen, a compact dropdown afterwards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PickerView {
    #[default]
    Grid,
    Dropdown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionState {
    pub selected_bracket: Option<BracketLabel>,
    pub metric:           Metric,
    pub hovered_party:    Option<PartyId>,
    pub picker:           PickerView,
}

impl SelectionState {
    /// `(absent, Absolute, absent)` with the grid picker.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose_bracket(&mut self, dataset: &ImpactDataset, label: &str) -> QueryResult<()> {
        if !dataset.contains_bracket(label) {
            log::warn!("rejected bracket choice '{label}'");
            return Err(QueryError::InvalidBracket { label: label.to_string() });
        }
        self.selected_bracket = Some(label.to_string());
        self.picker = PickerView::Dropdown;
        log::debug!("selection: bracket={label}");
        Ok(())
    }

    /// Deselect. Chart consumers then render nothing.
    pub fn clear_bracket(&mut self) {
        self.selected_bracket = None;
        log::debug!("selection: bracket cleared");
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
        log::debug!("selection: metric={metric:?}");
    }

    pub fn hover_party(&mut self, dataset: &ImpactDataset, party: Option<&str>) -> QueryResult<()> {
        if let Some(party) = party {
            if !dataset.contains_party(party) {
                log::warn!("rejected hover on unknown party '{party}'");
                return Err(QueryError::UnknownParty { party: party.to_string() });
            }
        }
        self.hovered_party = party.map(str::to_string);
        log::debug!("selection: hovered={:?}", self.hovered_party);
        Ok(())
    }
}
