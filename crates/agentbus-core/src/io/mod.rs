//! Atomic file I/O primitives for the bus storage root
//!
//! Everything that mutates the storage root goes through these two
//! primitives:
//!
//! - **Atomic write**: temp-then-rename replacement so readers never
//!   observe a partial file (messages and the cursor document)
//! - **File locking**: advisory locks with exponential backoff retry,
//!   serializing the cursor document's read-modify-write window

pub mod atomic;
pub mod lock;

pub use atomic::atomic_write;
pub use lock::{FileLock, acquire_lock};
