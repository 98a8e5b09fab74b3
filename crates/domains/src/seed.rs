//! Built-in listings the store starts with before any snapshot is restored.

use crate::models::{Category, Listing, ListingId, ListingType};

pub const SEED_LEN: usize = 4;

pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::new("it_kettle"),
            kind: ListingType::Kerbside,
            category: Category::Kerbside,
            title: "Green kettle".into(),
            description: "Perfect condition, moving overseas.".into(),
            image: "https://images.unsplash.com/photo-1526318472351-c75fcf070305?q=80&w=1200&auto=format&fit=crop".into(),
            location: "Indooroopilly".into(),
            distance_km: 2.1,
            owner: "Emma J.".into(),
            posted_ago: None,
            days_left: Some("4 days left".into()),
            start_at: None,
            stock_left: None,
        },
        Listing {
            id: ListingId::new("it_salad"),
            kind: ListingType::Free,
            category: Category::Food,
            title: "Salad bowl".into(),
            description: "Mixed salad, fresh and crisp.".into(),
            image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?q=80&w=1200&auto=format&fit=crop".into(),
            location: "Fortitude Valley".into(),
            distance_km: 0.8,
            owner: "Cafe Uno".into(),
            posted_ago: Some("1 hr ago".into()),
            days_left: None,
            start_at: None,
            stock_left: Some(3),
        },
        Listing {
            id: ListingId::new("it_tomatoes"),
            kind: ListingType::Free,
            category: Category::Food,
            title: "Fresh tomatoes".into(),
            description: "Sweet and juicy; today\u{2019}s pick.".into(),
            image: "https://images.unsplash.com/photo-1506806732259-39c2d0268443?q=80&w=1200&auto=format&fit=crop".into(),
            location: "West End".into(),
            distance_km: 1.0,
            owner: "Local Farm".into(),
            posted_ago: Some("10 min ago".into()),
            days_left: None,
            start_at: None,
            stock_left: Some(10),
        },
        Listing {
            id: ListingId::new("it_voucher"),
            kind: ListingType::FreeDelayed,
            category: Category::NonFood,
            title: "Cafe voucher".into(),
            description: "Free coffee voucher for local cafe.".into(),
            image: "https://images.unsplash.com/photo-1517701604599-bb29b565090c?q=80&w=1200&auto=format&fit=crop".into(),
            location: "South Bank".into(),
            distance_km: 2.0,
            owner: "Otti Cafe".into(),
            posted_ago: None,
            days_left: None,
            start_at: Some("Start 10 PM".into()),
            stock_left: None,
        },
    ]
}
