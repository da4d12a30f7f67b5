//! Services bridging the remote provider and the local store.

mod sync;

pub use sync::sync_messages;
