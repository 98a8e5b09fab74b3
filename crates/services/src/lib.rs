//! hicki/crates/services/src/lib.rs
//!
//! The item store and chat addressing the client screens call into.

pub mod addressing;
pub mod item_store;
pub mod search;

pub use addressing::{
    filter_threads, id_for_display_name, pair_thread_id, title_from_thread_id, ThreadRow,
    UserDirectory, DEFAULT_USER_ID,
};
pub use item_store::{HydrateOutcome, ItemStore, DEFAULT_ITEMS_KEY};
pub use search::ListingFilter;
