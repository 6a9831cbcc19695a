//! Roster validation pipelines

mod outcome;
mod service;

pub use outcome::{
    PlayerDeletion, PlayerRegistration, PlayerTransfer, ReassignPlayerRequest,
    RegisterPlayerRequest, RenameTeamRequest, TeamDeletion, TeamRegistration, TeamRename,
};
pub use service::RosterService;
