//! Roster domain module
//!
//! A roster is the set of players currently assigned to one team. Its
//! composition is bounded by fixed ceilings.

mod limits;

pub use limits::{RosterLimits, MAX_FOREIGN_COUNT, MAX_GOALKEEPER_COUNT, MAX_PLAYER_COUNT};
