//! Income-impact comparison core: per-bracket party rankings over a fixed
//! dataset, plus the selection state that drives them.

pub mod bracket;
pub mod captions;
pub mod command;
pub mod config;
pub mod dataset;
pub mod error;
pub mod palette;
pub mod query;
pub mod ranking;
mod reference;
pub mod selection;
pub mod session;
pub mod tables;
pub mod types;

pub use reference::PARTY_ORDER;
