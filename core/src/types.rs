//! Shared primitive types used across the entire crate.

/// The key of an income bracket, e.g. `"1-10k"` or `"250k+"`.
pub type BracketLabel = String;

/// A stable party identifier, e.g. `"SPD"` or `"Grüne"`.
pub type PartyId = String;

/// Whole currency units (€). The dataset carries no subunit precision.
pub type Euros = i64;

/// A percentage with one fractional digit of source precision (`1.9` = 1.9%).
pub type Percent = f64;

/// The canonical session identifier.
pub type SessionId = String;
