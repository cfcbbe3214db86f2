//! Init command implementation

use agent_bus_core::Bus;
use agent_bus_core::paths::resolve_root;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Initialize the storage root
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Storage root (default: $AGENTBUS_DIR or ./.agentbus)
    #[arg(long)]
    dir: Option<PathBuf>,
}

/// Execute the init command
pub fn execute(args: InitArgs) -> Result<()> {
    let root = resolve_root(args.dir)?;
    let bus = Bus::init(&root)?;

    println!("Initialized agentbus at: {}", bus.root().display());
    println!("Messages directory: {}", bus.messages_dir().display());
    println!("Last-seen file: {}", bus.cursor_path().display());
    Ok(())
}
