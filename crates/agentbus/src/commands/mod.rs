//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod get_messages;
mod init;
mod list_agents;
mod send;

/// agentbus - File-backed message bus for local AI agents
#[derive(Parser, Debug)]
#[command(
    name = "agentbus",
    version,
    about = "File-backed message bus for local AI agents",
    long_about = "A tiny message bus over a shared .agentbus/ directory: agents send text \
                  messages and track what they have already read. Files only, no daemon, no DB."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize the storage root (idempotent)
    Init(init::InitArgs),

    /// Send a message to the bus
    Send(send::SendArgs),

    /// Get messages; with --for, fetch an agent's unread and mark them seen
    GetMessages(get_messages::GetMessagesArgs),

    /// Show known agents and their last-seen timestamps
    ListAgents(list_agents::ListAgentsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::execute(args),
            Commands::Send(args) => send::execute(args),
            Commands::GetMessages(args) => get_messages::execute(args),
            Commands::ListAgents(args) => list_agents::execute(args),
        }
    }
}
