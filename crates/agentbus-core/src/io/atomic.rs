//! Atomic whole-file replacement

use crate::error::BusError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Replace the file at `path` with `bytes`, all or nothing.
///
/// The payload goes to a sibling temp file in the same directory (same
/// filesystem, so the final rename is a single metadata operation), is
/// synced to stable storage, then renamed onto the target. A concurrent
/// reader sees either the previous content or the full new content, never
/// a partial write. Interruption before the rename leaves only an orphan
/// temp file; the target keeps its previous content.
///
/// # Errors
///
/// Returns `BusError::Io` if the temp file cannot be written or the rename
/// fails; the target is untouched in both cases and the caller must treat
/// the mutation as not applied.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), BusError> {
    let tmp_path = path.with_extension("tmp");

    {
        let mut tmp = fs::File::create(&tmp_path).map_err(|e| BusError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;

        tmp.write_all(bytes).map_err(|e| BusError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;

        tmp.sync_all().map_err(|e| BusError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;
    }

    fs::rename(&tmp_path, path).map_err(|e| BusError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
