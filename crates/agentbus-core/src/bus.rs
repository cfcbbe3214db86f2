//! Bus facade composing the message and cursor stores

use crate::error::BusError;
use crate::io::atomic_write;
use crate::schema::Message;
use crate::store::{CursorStore, Listing, MessageStore};
use crate::text;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Message collection directory name under the storage root.
pub const MESSAGES_DIR: &str = "messages";

/// Cursor document name under the storage root.
pub const CURSOR_FILE: &str = "last_seen.json";

/// Handle on a storage root
///
/// Holds no state beyond the resolved paths: every operation re-reads
/// from disk, so each invocation is self-contained and crash-safe
/// between calls.
#[derive(Debug, Clone)]
pub struct Bus {
    root: PathBuf,
    messages: MessageStore,
    cursors: CursorStore,
}

impl Bus {
    /// Create the storage root, its message directory and an empty cursor
    /// document if absent. Idempotent: re-running on an initialized root
    /// is a no-op success.
    pub fn init(root: &Path) -> Result<Bus, BusError> {
        let messages_dir = root.join(MESSAGES_DIR);
        fs::create_dir_all(&messages_dir).map_err(|e| BusError::Io {
            path: messages_dir.clone(),
            source: e,
        })?;

        let cursor_path = root.join(CURSOR_FILE);
        if !cursor_path.exists() {
            atomic_write(&cursor_path, b"{}")?;
        }

        Self::open(root)
    }

    /// Open an existing storage root.
    ///
    /// Fails with `Precondition` when the root or its message directory
    /// does not exist. A missing cursor document alone is tolerated;
    /// reads treat it as an empty map.
    pub fn open(root: &Path) -> Result<Bus, BusError> {
        let messages_dir = root.join(MESSAGES_DIR);
        if !messages_dir.is_dir() {
            return Err(BusError::Precondition {
                path: root.to_path_buf(),
            });
        }

        Ok(Bus {
            root: root.to_path_buf(),
            messages: MessageStore::new(messages_dir),
            cursors: CursorStore::new(root.join(CURSOR_FILE)),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn messages_dir(&self) -> &Path {
        self.messages.dir()
    }

    pub fn cursor_path(&self) -> &Path {
        self.cursors.path()
    }

    /// Append a message and advance the sender's own cursor to it, so a
    /// sender never sees its own message reported as unread.
    ///
    /// The two steps are not transactional: if the cursor update fails,
    /// the appended message stays on the bus and the error surfaces.
    pub fn send(&self, author: &str, content: &str) -> Result<Message, BusError> {
        let author = text::validate_author(author)?;
        text::validate_content(content)?;

        let message = self.messages.append(&author, content)?;
        debug!(author = %message.author, timestamp = %message.timestamp, "message appended");

        self.cursors.set(&message.author, &message.timestamp)?;
        Ok(message)
    }

    /// Every message on the bus, oldest first. Touches no cursor.
    pub fn get_all_messages(&self) -> Result<Listing, BusError> {
        self.messages.list_all()
    }

    /// Messages newer than `agent`'s cursor, advancing the cursor past
    /// the newest returned message. A repeat call with no intervening
    /// sends returns an empty listing.
    pub fn get_unread(&self, agent: &str) -> Result<Listing, BusError> {
        let agent = text::validate_author(agent)?;

        let cursor = self.cursors.get(&agent)?;
        let listing = self.messages.list_since(cursor.as_deref())?;

        if let Some(last) = listing.messages.last() {
            self.cursors.set(&agent, &last.timestamp)?;
            debug!(agent = %agent, unread = listing.messages.len(), "cursor advanced");
        }

        Ok(listing)
    }

    /// Known agent identities with their last-seen timestamps, ordered by
    /// identity.
    ///
    /// Derived from the cursor document: an agent appears once it has
    /// sent a message or fetched its unread messages, never before.
    pub fn list_agents(&self) -> Result<Vec<(String, String)>, BusError> {
        Ok(self.cursors.load()?.into_iter().collect())
    }
}
