//! Sanity checks on the shared fixtures and seed data.

use domains::seed::{seed_listings, SEED_LEN};
use domains::{Category, Listing, ListingType};
use integration_tests::{new_listing, CLIENT_SNAPSHOT};

#[test]
fn client_snapshot_parses() {
    let listings: Vec<Listing> = serde_json::from_str(CLIENT_SNAPSHOT).unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].kind, ListingType::Free);
    assert_eq!(listings[1].days_left.as_deref(), Some("4 days left"));
}

#[test]
fn seed_round_trips_through_json() {
    let raw = serde_json::to_string(&seed_listings()).unwrap();
    let back: Vec<Listing> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, seed_listings());
}

#[test]
fn seed_covers_every_type_and_category() {
    let seed = seed_listings();
    assert_eq!(seed.len(), SEED_LEN);
    for category in Category::ALL {
        assert!(seed.iter().any(|l| l.category == category));
    }
    for kind in [ListingType::Kerbside, ListingType::Free, ListingType::FreeDelayed] {
        assert!(seed.iter().any(|l| l.kind == kind));
    }
}

#[test]
fn fixture_listing_is_valid() {
    assert!(new_listing("Bread").validate().is_ok());
}
