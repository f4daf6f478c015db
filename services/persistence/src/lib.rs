//! Persistence Service
//!
//! Storage collaborators for the matching core: an in-memory store
//! backing tests and development, and a checksummed per-market snapshot
//! store for ladders. The matching engine only ever sees the trait
//! surface defined in `matching_engine::store`.

pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::SnapshotLadderStore;
