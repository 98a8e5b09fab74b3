//! Listing id generation.

use domains::{IdSource, ListingId};
use uuid::Uuid;

pub const LISTING_ID_PREFIX: &str = "it_";

/// Issues `it_<uuid v7>` ids.
///
/// UUID v7 is time-ordered and carries random bits below the millisecond, so
/// repeated calls within the same tick still yield distinct ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeOrderedIds;

impl IdSource for TimeOrderedIds {
    fn next_id(&self) -> ListingId {
        ListingId(format!("{LISTING_ID_PREFIX}{}", Uuid::now_v7().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_in_tight_loop() {
        let ids = TimeOrderedIds;
        let issued: HashSet<_> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 10_000);
    }

    #[test]
    fn test_id_shape() {
        let id = TimeOrderedIds.next_id();
        assert!(id.as_str().starts_with(LISTING_ID_PREFIX));
        assert_eq!(id.as_str().len(), LISTING_ID_PREFIX.len() + 32);
        assert!(!id.as_str().contains("__"));
    }
}
