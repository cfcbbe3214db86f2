//! On-disk schemas for the bus storage layout
//!
//! Types here map 1:1 to what is persisted under the storage root. All
//! types preserve unknown fields for forward compatibility.

mod message;

pub use message::Message;
