//! # storage-adapters
//!
//! Implementations of the `domains` ports: key-value slots on disk or in
//! memory, and the listing id source.

pub mod file_slot;
pub mod ids;
pub mod memory_slot;

pub use file_slot::FileSlot;
pub use ids::TimeOrderedIds;
pub use memory_slot::MemorySlot;
