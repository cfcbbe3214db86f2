//! Append-only message collection, one JSON file per message
//!
//! Filenames encode the `(timestamp, author)` identity key with a
//! fixed-width sortable timestamp, so lexical filename order equals
//! chronological order. Reads re-enumerate the directory on every call;
//! no iterator state survives between calls.

use crate::error::BusError;
use crate::io::atomic_write;
use crate::schema::Message;
use crate::time;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of a read over the message collection
#[derive(Debug, Default)]
pub struct Listing {
    /// Valid records, ordered by `(timestamp, author)` ascending
    pub messages: Vec<Message>,
    /// Entries excluded because they could not be read or parsed
    pub skipped: usize,
}

/// File-per-message store under `<root>/messages/`
#[derive(Debug, Clone)]
pub struct MessageStore {
    dir: PathBuf,
}

impl MessageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append one message with a freshly generated UTC timestamp.
    ///
    /// Concurrent appends from different authors write distinct files and
    /// never corrupt each other. Two appends by the same author in the
    /// same microsecond collide on the filename; the atomic overwrite
    /// makes that last-write-wins rather than a crash.
    pub fn append(&self, author: &str, content: &str) -> Result<Message, BusError> {
        let timestamp = time::now_iso_micros();
        let message = Message {
            author: author.to_string(),
            timestamp: timestamp.clone(),
            content: content.to_string(),
            unknown_fields: HashMap::new(),
        };

        let filename = format!("{}_{}.json", time::filename_encode(&timestamp), author);
        let path = self.dir.join(filename);

        let body = serde_json::to_vec_pretty(&message).map_err(|e| BusError::Json {
            path: path.clone(),
            source: e,
        })?;
        atomic_write(&path, &body)?;

        Ok(message)
    }

    /// Every parseable message, ordered by `(timestamp, author)` ascending.
    ///
    /// Entries that cannot be read or parsed are excluded from the result
    /// and counted on the listing; the read never aborts because of one
    /// bad file.
    pub fn list_all(&self) -> Result<Listing, BusError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| BusError::Io {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut listing = Listing::default();
        for entry in entries {
            let entry = entry.map_err(|e| BusError::Io {
                path: self.dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_message_file(&path) {
                Some(message) => listing.messages.push(message),
                None => listing.skipped += 1,
            }
        }

        // Fixed-width timestamps: string comparison is chronological.
        listing.messages.sort_by(|a, b| {
            (a.timestamp.as_str(), a.author.as_str()).cmp(&(b.timestamp.as_str(), b.author.as_str()))
        });

        Ok(listing)
    }

    /// Messages strictly newer than `cutoff`; everything when absent.
    ///
    /// A cutoff that fails to parse is treated as absent: the agent is
    /// considered never to have read anything rather than failing the
    /// whole read.
    pub fn list_since(&self, cutoff: Option<&str>) -> Result<Listing, BusError> {
        let mut listing = self.list_all()?;

        let Some(cutoff) = cutoff else {
            return Ok(listing);
        };
        let Some(cutoff_dt) = time::parse_iso(cutoff) else {
            warn!(cutoff, "unparseable cursor timestamp, treating agent as never seen");
            return Ok(listing);
        };

        listing.messages.retain(|m| match time::parse_iso(&m.timestamp) {
            Some(dt) => dt > cutoff_dt,
            None => false,
        });

        Ok(listing)
    }
}

/// Parse one message file, or `None` if it cannot be read or decoded.
fn read_message_file(path: &Path) -> Option<Message> {
    let content = match fs::read(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable message file");
            return None;
        }
    };
    match serde_json::from_slice(&content) {
        Ok(message) => Some(message),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping malformed message file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> MessageStore {
        let dir = temp_dir.path().join("messages");
        fs::create_dir_all(&dir).unwrap();
        MessageStore::new(dir)
    }

    #[test]
    fn append_writes_sortable_filename() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let message = store.append("alice", "hello").unwrap();

        let expected = format!(
            "{}_alice.json",
            time::filename_encode(&message.timestamp)
        );
        let path = store.dir().join(&expected);
        assert!(path.exists(), "expected {expected} to exist");
        assert!(!expected.contains(':'));

        let on_disk: Message =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk.author, "alice");
        assert_eq!(on_disk.content, "hello");
        assert_eq!(on_disk.timestamp, message.timestamp);
    }

    #[test]
    fn empty_collection_lists_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let listing = store.list_all().unwrap();
        assert!(listing.messages.is_empty());
        assert_eq!(listing.skipped, 0);
    }

    #[test]
    fn list_all_ordered_by_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.append("alice", "first").unwrap();
        store.append("bob", "second").unwrap();
        store.append("alice", "third").unwrap();

        let listing = store.list_all().unwrap();
        let contents: Vec<_> = listing.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second", "third"]);

        let mut timestamps: Vec<_> =
            listing.messages.iter().map(|m| m.timestamp.clone()).collect();
        let sorted = timestamps.clone();
        timestamps.sort();
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn corrupt_file_skipped_and_counted() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.append("alice", "valid").unwrap();
        fs::write(
            store.dir().join("2026-08-05T00-00-00.000000+00-00_evil.json"),
            b"{not json",
        )
        .unwrap();
        fs::write(
            store.dir().join("2026-08-05T00-00-01.000000+00-00_evil.json"),
            b"{\"author\": \"evil\"}",
        )
        .unwrap();

        let listing = store.list_all().unwrap();
        assert_eq!(listing.messages.len(), 1);
        assert_eq!(listing.messages[0].content, "valid");
        assert_eq!(listing.skipped, 2);
    }

    #[test]
    fn non_json_entries_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.append("alice", "valid").unwrap();
        fs::write(store.dir().join("notes.txt"), b"not a message").unwrap();
        fs::write(store.dir().join("orphan.tmp"), b"half-written").unwrap();

        let listing = store.list_all().unwrap();
        assert_eq!(listing.messages.len(), 1);
        assert_eq!(listing.skipped, 0);
    }

    #[test]
    fn list_since_filters_strictly_newer() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let first = store.append("alice", "first").unwrap();
        let second = store.append("bob", "second").unwrap();

        let listing = store.list_since(Some(first.timestamp.as_str())).unwrap();
        assert_eq!(listing.messages.len(), 1);
        assert_eq!(listing.messages[0].content, "second");

        // Cutoff at the newest message: nothing is newer
        let listing = store.list_since(Some(second.timestamp.as_str())).unwrap();
        assert!(listing.messages.is_empty());
    }

    #[test]
    fn list_since_none_returns_everything() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.append("alice", "first").unwrap();
        store.append("bob", "second").unwrap();

        let listing = store.list_since(None).unwrap();
        assert_eq!(listing.messages.len(), 2);
    }

    #[test]
    fn list_since_unparseable_cutoff_returns_everything() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        store.append("alice", "first").unwrap();

        let listing = store.list_since(Some("not-a-timestamp")).unwrap();
        assert_eq!(listing.messages.len(), 1);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = MessageStore::new(temp_dir.path().join("nope"));

        assert!(matches!(store.list_all(), Err(BusError::Io { .. })));
    }
}
