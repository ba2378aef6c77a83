//! CLI module for the REST API
//!
//! - `serve`: run the HTTP server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// REST API - CRUD backend for users and products
#[derive(Parser)]
#[command(name = "rest-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default mode)
    #[default]
    Serve,
}
