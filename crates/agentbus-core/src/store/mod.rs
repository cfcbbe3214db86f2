//! Message and cursor persistence over the storage root

pub mod cursors;
pub mod messages;

pub use cursors::CursorStore;
pub use messages::{Listing, MessageStore};
