//! Player infrastructure implementations

mod repository;
mod service;

pub use repository::InMemoryPlayerRepository;
pub use service::PlayerService;
