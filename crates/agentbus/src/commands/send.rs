//! Send command implementation

use agent_bus_core::Bus;
use agent_bus_core::paths::resolve_root;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Send a message to the bus
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Message text
    message: String,

    /// Author name
    #[arg(long)]
    author: String,

    /// Storage root (default: $AGENTBUS_DIR or ./.agentbus)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Output the created message as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the send command
pub fn execute(args: SendArgs) -> Result<()> {
    let root = resolve_root(args.dir)?;
    let bus = Bus::open(&root)?;

    let message = bus.send(&args.author, &args.message)?;

    if args.json {
        println!("{}", serde_json::to_string(&message)?);
    } else {
        println!(
            "Message sent by {} at {}",
            message.author, message.timestamp
        );
    }
    Ok(())
}
