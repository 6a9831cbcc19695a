//! Infrastructure layer - Repository implementations and services

pub mod logging;
pub mod player;
pub mod roster;
pub mod team;
