//! Core library for agent-bus: a file-backed append-only message log with
//! per-agent unread tracking.
//!
//! Independent local processes ("agents") exchange short text messages
//! through a shared storage root on the local filesystem. No database, no
//! daemon, no network service: files only. Every mutation goes through an
//! atomic temp-then-rename write, so readers never observe partial files;
//! the shared cursor document is additionally guarded by an advisory lock
//! so concurrent updates cannot discard each other's entries.
//!
//! Storage layout under a root directory:
//!
//! ```text
//! <root>/
//!   messages/
//!     <sortable-timestamp>_<author>.json    one file per message
//!   last_seen.json                          per-agent last-read timestamp
//!   last_seen.lock                          advisory lock (content unused)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use agent_bus_core::Bus;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), agent_bus_core::BusError> {
//! let bus = Bus::init(Path::new(".agentbus"))?;
//! bus.send("alice", "hello")?;
//!
//! let unread = bus.get_unread("bob")?;
//! for message in &unread.messages {
//!     println!("{}: {}", message.author, message.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bus;
pub mod error;
pub mod io;
pub mod logging;
pub mod paths;
pub mod schema;
pub mod store;
pub mod text;
pub mod time;

pub use bus::Bus;
pub use error::BusError;
pub use schema::Message;
pub use store::Listing;
