use crate::ranking::Metric;
use crate::types::{BracketLabel, PartyId};
use serde::{Deserialize, Serialize};

/// Every user-issued selection event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SelectionCommand {
    ChooseBracket { label: BracketLabel },
    ClearBracket,
    SetMetric { metric: Metric },
    /// `party: null` ends the hover.
    HoverParty {
        #[serde(default)]
        party: Option<PartyId>,
    },
}

impl SelectionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChooseBracket { .. } => "choose_bracket",
            Self::ClearBracket         => "clear_bracket",
            Self::SetMetric { .. }     => "set_metric",
            Self::HoverParty { .. }    => "hover_party",
        }
    }
}
