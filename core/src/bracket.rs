//! Income brackets, the contiguous ranges the population is partitioned into.

use crate::types::BracketLabel;
use serde::{Deserialize, Serialize};

/// Upper end of a bracket. Only the top bracket is unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBound {
    Bounded(u64),
    Unbounded,
}

impl IncomeBound {
    /// `None` for the unbounded sentinel.
    pub fn as_option(self) -> Option<u64> {
        match self {
            Self::Bounded(max) => Some(max),
            Self::Unbounded    => None,
        }
    }
}

impl From<Option<u64>> for IncomeBound {
    fn from(max: Option<u64>) -> Self {
        max.map_or(Self::Unbounded, Self::Bounded)
    }
}

/// An immutable bracket record. Bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomeBracket {
    pub min_income: u64,
    pub max_income: IncomeBound,
    pub label:      BracketLabel,
}

impl IncomeBracket {
    pub fn new(min_income: u64, max_income: IncomeBound, label: impl Into<BracketLabel>) -> Self {
        Self { min_income, max_income, label: label.into() }
    }

    pub fn contains(&self, income: u64) -> bool {
        income >= self.min_income
            && match self.max_income {
                IncomeBound::Bounded(max) => income <= max,
                IncomeBound::Unbounded    => true,
            }
    }

    /// Human-readable option label with German digit grouping:
    /// `"10.001€ - 20.000€"`, or `"Über 250.000€"` for the top bracket.
    pub fn option_label(&self) -> String {
        match self.max_income {
            IncomeBound::Bounded(max) => format!(
                "{}€ - {}€",
                group_thousands(self.min_income),
                group_thousands(max)
            ),
            IncomeBound::Unbounded => format!(
                "Über {}€",
                group_thousands(self.min_income.saturating_sub(1))
            ),
        }
    }
}

/// Format an integer with `.` as the thousands separator (de-DE).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Check that `brackets` start at zero, are ascending and gap-free, and end
/// with the only unbounded bracket. Returns the first violation found.
pub(crate) fn check_contiguous(brackets: &[IncomeBracket]) -> Result<(), String> {
    let Some(first) = brackets.first() else {
        return Err("no income brackets defined".into());
    };
    if first.min_income != 0 {
        return Err(format!(
            "first bracket '{}' starts at {} instead of 0",
            first.label, first.min_income
        ));
    }

    for pair in brackets.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        let IncomeBound::Bounded(max) = lower.max_income else {
            return Err(format!("bracket '{}' is unbounded but not last", lower.label));
        };
        if max < lower.min_income {
            return Err(format!("bracket '{}' ends before it starts", lower.label));
        }
        if upper.min_income != max + 1 {
            return Err(format!(
                "bracket '{}' starts at {} but '{}' ends at {max}",
                upper.label, upper.min_income, lower.label
            ));
        }
    }

    match brackets.last() {
        Some(last) if last.max_income == IncomeBound::Unbounded => Ok(()),
        Some(last) => Err(format!("top bracket '{}' must be unbounded", last.label)),
        None => Ok(()),
    }
}
