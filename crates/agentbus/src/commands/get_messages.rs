//! Get-messages command implementation

use agent_bus_core::paths::resolve_root;
use agent_bus_core::{Bus, Message};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Get messages from the bus
#[derive(Args, Debug)]
pub struct GetMessagesArgs {
    /// Fetch unread messages for this agent and mark them seen
    #[arg(long = "for", value_name = "AGENT")]
    for_agent: Option<String>,

    /// Storage root (default: $AGENTBUS_DIR or ./.agentbus)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the get-messages command
pub fn execute(args: GetMessagesArgs) -> Result<()> {
    let root = resolve_root(args.dir)?;
    let bus = Bus::open(&root)?;

    let unread_view = args.for_agent.is_some();
    let listing = match args.for_agent {
        Some(ref agent) => bus.get_unread(agent)?,
        None => bus.get_all_messages()?,
    };

    if listing.skipped > 0 {
        eprintln!(
            "Warning: skipped {} unreadable message file(s)",
            listing.skipped
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing.messages)?);
    } else if listing.messages.is_empty() {
        if unread_view {
            println!("(no unread messages)");
        } else {
            println!("(no messages)");
        }
    } else {
        print_messages(&listing.messages);
    }
    Ok(())
}

fn print_messages(messages: &[Message]) {
    for message in messages {
        println!("--- {} | {} ---", message.timestamp, message.author);
        println!("{}", message.content);
        println!();
    }
}
