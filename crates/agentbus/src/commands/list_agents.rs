//! List-agents command implementation

use agent_bus_core::Bus;
use agent_bus_core::paths::resolve_root;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Show known agents and their last-seen timestamps
#[derive(Args, Debug)]
pub struct ListAgentsArgs {
    /// Storage root (default: $AGENTBUS_DIR or ./.agentbus)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Output as a JSON object of agent -> last-seen timestamp
    #[arg(long)]
    json: bool,
}

/// Execute the list-agents command
pub fn execute(args: ListAgentsArgs) -> Result<()> {
    let root = resolve_root(args.dir)?;
    let bus = Bus::open(&root)?;

    let agents = bus.list_agents()?;

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = agents
            .into_iter()
            .map(|(agent, last_seen)| (agent, serde_json::Value::from(last_seen)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if agents.is_empty() {
        println!("(no agents recorded yet)");
        return Ok(());
    }

    for (agent, last_seen) in &agents {
        println!("{agent}: last_seen={last_seen}");
    }
    Ok(())
}
