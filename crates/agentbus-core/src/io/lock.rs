//! File locking with backoff retry
//!
//! The cursor document is rewritten whole on every update; the lock
//! serializes the read-modify-write window across processes so two
//! concurrent updates cannot discard each other's entries.

use crate::error::BusError;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

#[cfg(unix)]
use std::os::unix::io::AsRawFd;

#[cfg(not(unix))]
use std::path::PathBuf;

/// File lock guard that automatically releases on drop
pub struct FileLock {
    #[allow(dead_code)]
    file: File,
    #[cfg(unix)]
    fd: i32,
    #[cfg(not(unix))]
    path: PathBuf,
}

impl Drop for FileLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        unsafe {
            libc::flock(self.fd, libc::LOCK_UN);
        }

        #[cfg(not(unix))]
        {
            // The create_new protocol holds the lock through the file's
            // existence; remove it so the next acquisition can succeed.
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Acquire an exclusive lock on a file with backoff retry
///
/// Attempts to acquire a lock with exponential backoff between attempts:
/// 50ms, 100ms, 200ms, 400ms, 800ms.
///
/// Returns a [`FileLock`] guard that releases the lock on drop, or
/// `BusError::LockTimeout` after exhausting all retries.
pub fn acquire_lock(path: &Path, max_retries: u32) -> Result<FileLock, BusError> {
    #[cfg(unix)]
    {
        unix_acquire_lock(path, max_retries)
    }

    #[cfg(not(unix))]
    {
        fallback_acquire_lock(path, max_retries)
    }
}

#[cfg(unix)]
fn unix_acquire_lock(path: &Path, max_retries: u32) -> Result<FileLock, BusError> {
    use std::fs::OpenOptions;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| BusError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let fd = file.as_raw_fd();

    for attempt in 0..=max_retries {
        let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };

        if result == 0 {
            return Ok(FileLock { file, fd });
        }

        let err = std::io::Error::last_os_error();
        let would_block = err.raw_os_error() == Some(libc::EWOULDBLOCK)
            || err.raw_os_error() == Some(libc::EAGAIN);

        if !would_block {
            return Err(BusError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }

        // Someone else holds the lock
        if attempt < max_retries {
            let wait_ms = 50u64 * (1 << attempt);
            std::thread::sleep(Duration::from_millis(wait_ms));
        }
    }

    Err(BusError::LockTimeout {
        path: path.to_path_buf(),
        retries: max_retries,
    })
}

#[cfg(not(unix))]
fn fallback_acquire_lock(path: &Path, max_retries: u32) -> Result<FileLock, BusError> {
    use std::fs::OpenOptions;

    // No flock available: lock-file existence is the lock.
    for attempt in 0..=max_retries {
        match OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(file) => {
                return Ok(FileLock {
                    file,
                    path: path.to_path_buf(),
                });
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if attempt < max_retries {
                    let wait_ms = 50u64 * (1 << attempt);
                    std::thread::sleep(Duration::from_millis(wait_ms));
                }
            }
            Err(e) => {
                return Err(BusError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    Err(BusError::LockTimeout {
        path: path.to_path_buf(),
        retries: max_retries,
    })
}
