//! agentbus - File-backed message bus for local AI agents
//!
//! A thin CLI over the `.agentbus/` storage root, providing init, send,
//! get-messages, and list-agents commands with atomic file I/O.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    agent_bus_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
