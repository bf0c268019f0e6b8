//! unitconv MCP Server
//!
//! Tools:
//! - convert: Convert a value between two units of one conversion type
//! - list_categories: List conversion types and their units
//! - list_units: List the units of one conversion type
//!
//! Logs go to stderr; stdout carries protocol messages only.

mod config;
mod format;
mod protocol;
mod server;
mod tools;

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::protocol::{PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = ServerConfig::from_env();

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "unitconv MCP server started");
    info!(?config, "configuration loaded");
    info!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "server ready, waiting for requests"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = server::serve(&config, stdin.lock(), stdout.lock());

    match result {
        Ok(()) => {
            info!("server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "i/o failure, shutting down");
            ExitCode::FAILURE
        }
    }
}
