//! One user's session: a selection over a shared, read-only dataset.
//!
//! Control flow per interaction:
//!   1. One SelectionCommand is applied atomically (or rejected whole).
//!   2. The chart is re-derived from (selected bracket, metric).
//!   3. The presentation layer renders the resulting SessionView.

use crate::{
    captions::{axis_caption, metric_toggle_label, PovertyIndicator},
    command::SelectionCommand,
    error::QueryResult,
    query::ImpactQuery,
    ranking::{ChartRecord, Metric},
    selection::SelectionState,
    types::SessionId,
};
use serde::{Deserialize, Serialize};

pub struct Session {
    pub id:    SessionId,
    query:     ImpactQuery,
    selection: SelectionState,
}

impl Session {
    pub fn new(query: ImpactQuery) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), query)
    }

    pub fn with_id(id: SessionId, query: ImpactQuery) -> Self {
        log::debug!("session {id} started");
        Self { id, query, selection: SelectionState::new() }
    }

    pub fn query(&self) -> &ImpactQuery {
        &self.query
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn choose_bracket(&mut self, label: &str) -> QueryResult<()> {
        self.selection.choose_bracket(self.query.dataset(), label)
    }

    pub fn clear_bracket(&mut self) {
        self.selection.clear_bracket();
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.selection.set_metric(metric);
    }

    pub fn hover_party(&mut self, party: Option<&str>) -> QueryResult<()> {
        self.selection.hover_party(self.query.dataset(), party)
    }

    pub fn apply(&mut self, command: &SelectionCommand) -> QueryResult<()> {
        log::debug!("session {}: {}", self.id, command.name());
        match command {
            SelectionCommand::ChooseBracket { label } => self.choose_bracket(label),
            SelectionCommand::ClearBracket => {
                self.clear_bracket();
                Ok(())
            }
            SelectionCommand::SetMetric { metric } => {
                self.set_metric(*metric);
                Ok(())
            }
            SelectionCommand::HoverParty { party } => self.hover_party(party.as_deref()),
        }
    }

    /// Ranked records for the current selection; empty when no bracket is chosen.
    pub fn chart(&self) -> QueryResult<Vec<ChartRecord>> {
        match &self.selection.selected_bracket {
            Some(bracket) => self.query.rank(bracket, self.selection.metric),
            None => Ok(Vec::new()),
        }
    }

    pub fn poverty_indicator(&self) -> QueryResult<Option<PovertyIndicator>> {
        let Some(party) = &self.selection.hovered_party else {
            return Ok(None);
        };
        let delta = self.query.get_poverty_risk(party)?;
        Ok(Some(PovertyIndicator::new(party, delta, self.query.palette())))
    }

    pub fn view(&self) -> QueryResult<SessionView> {
        let metric = self.selection.metric;
        Ok(SessionView {
            session_id:   self.id.clone(),
            selection:    self.selection.clone(),
            chart:        self.chart()?,
            axis_caption: axis_caption(metric),
            metric_label: metric_toggle_label(metric).to_string(),
            poverty:      self.poverty_indicator()?,
        })
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionView {
    pub session_id:   SessionId,
    pub selection:    SelectionState,
    pub chart:        Vec<ChartRecord>,
    pub axis_caption: String,
    pub metric_label: String,
    pub poverty:      Option<PovertyIndicator>,
}
