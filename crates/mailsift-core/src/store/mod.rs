//! Local message store.
//!
//! Holds the cached subset of remote message metadata the rule engine
//! evaluates against. Records are written by the sync service and are
//! read-only to the engine.

mod model;
mod repository;

pub use model::CachedMessage;
pub use repository::MessageRepository;
