//! Repository Layer
//!
//! The whole list collection is stored as one JSON array under a single
//! key of a key-value store (browser localStorage in the app, a map in
//! tests).

mod list_repo;
mod memory;
mod traits;

pub use list_repo::ListRepository;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
