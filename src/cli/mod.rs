//! CLI for the football roster service
//!
//! - `serve`: run the HTTP API

pub mod serve;

use clap::{Parser, Subcommand};

/// Football roster service - team and player registration with squad limits
#[derive(Parser)]
#[command(name = "football-roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
