//! hicki/crates/domains/src/lib.rs
//!
//! Entities and port definitions shared by every Hicki crate.

pub mod errors;
pub mod models;
pub mod ports;
pub mod seed;

// Re-exporting for easier access in other crates
pub use errors::*;
pub use models::*;
pub use ports::*;

#[cfg(test)]
mod tests {
    use super::models::*;
    use super::seed::{seed_listings, SEED_LEN};
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let seed = seed_listings();
        assert_eq!(seed.len(), SEED_LEN);
        let ids: HashSet<_> = seed.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), SEED_LEN);
    }

    #[test]
    fn test_listing_json_uses_client_field_names() {
        let salad = seed_listings().remove(1);
        let value = serde_json::to_value(&salad).unwrap();
        assert_eq!(value["type"], "free");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["distanceKm"], 0.8);
        assert_eq!(value["stockLeft"], 3);
        assert_eq!(value["postedAgo"], "1 hr ago");
        assert!(value.get("daysLeft").is_none());
    }

    #[test]
    fn test_listing_parses_client_snapshot() {
        let raw = r#"{
            "id": "it_voucher",
            "type": "freeDelayed",
            "category": "Non-food",
            "title": "Cafe voucher",
            "description": "Free coffee voucher for local cafe.",
            "image": "https://example.com/v.jpg",
            "location": "South Bank",
            "distanceKm": 2,
            "owner": "Otti Cafe",
            "startAt": "Start 10 PM"
        }"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.kind, ListingType::FreeDelayed);
        assert_eq!(listing.category, Category::NonFood);
        assert_eq!(listing.distance_km, 2.0);
        assert_eq!(listing.start_at.as_deref(), Some("Start 10 PM"));
        assert!(listing.stock_left.is_none());
    }

    #[test]
    fn test_negative_stock_rejected_by_schema() {
        let raw = r#"{"id":"x","type":"free","category":"Food","title":"t","description":"d",
            "image":"i","location":"l","distanceKm":1,"owner":"o","stockLeft":-1}"#;
        assert!(serde_json::from_str::<Listing>(raw).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut input = seed_listings().remove(0).to_new();
        assert!(input.validate().is_ok());

        input.title = "   ".into();
        assert!(input.validate().is_err());

        input.title = "Kettle".into();
        input.distance_km = -0.1;
        assert!(input.validate().is_err());

        input.distance_km = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("non-food".parse::<Category>().unwrap(), Category::NonFood);
        assert_eq!("FOOD".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("freeDelayed".parse::<ListingType>().unwrap(), ListingType::FreeDelayed);
        assert!("gift".parse::<ListingType>().is_err());
    }
}
