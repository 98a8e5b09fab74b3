//! Shared fixtures for the integration suites.

use std::sync::Arc;

use domains::{Category, KeyValueSlot, ListingType, NewListing};
use services::ItemStore;
use storage_adapters::TimeOrderedIds;

/// Snapshot in the exact shape the mobile client writes under `items.v1`.
pub const CLIENT_SNAPSHOT: &str = r#"[
  {"id":"it_m5x2k1","type":"free","category":"Food","title":"Bread",
   "description":"Two sourdough loaves.","image":"file:///bread.jpg",
   "location":"Paddington","distanceKm":1.4,"owner":"Bakery Co",
   "postedAgo":"5 min ago","stockLeft":2},
  {"id":"it_kettle","type":"kerbside","category":"Kerbside","title":"Green kettle",
   "description":"Perfect condition, moving overseas.","image":"https://example.com/k.jpg",
   "location":"Indooroopilly","distanceKm":2.1,"owner":"Emma J.","daysLeft":"4 days left"}
]"#;

pub fn new_listing(title: &str) -> NewListing {
    NewListing {
        kind: ListingType::Free,
        category: Category::Food,
        title: title.to_string(),
        description: format!("{title}, free to a good home."),
        image: "https://example.com/item.jpg".into(),
        location: "West End".into(),
        distance_km: 0.5,
        owner: "Local Farm".into(),
        posted_ago: Some("just now".into()),
        days_left: None,
        start_at: None,
        stock_left: Some(5),
    }
}

/// A seeded store over `slot` with real time-ordered ids.
pub fn store_on(slot: Arc<dyn KeyValueSlot>) -> ItemStore {
    ItemStore::with_seed(slot, Arc::new(TimeOrderedIds))
}
