//! # Domain Models
//!
//! These structs represent the core entities of Hicki.
//! Field names serialize in camelCase so snapshots stay readable by the
//! mobile client that wrote them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Opaque listing identifier (e.g. `it_kettle`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Decides which optional fields are meaningful and which claim flow the
/// client presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    #[serde(rename = "kerbside")]
    Kerbside,
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "freeDelayed")]
    FreeDelayed,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kerbside => "kerbside",
            Self::Free => "free",
            Self::FreeDelayed => "freeDelayed",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kerbside" => Ok(Self::Kerbside),
            "free" => Ok(Self::Free),
            "freeDelayed" | "free-delayed" => Ok(Self::FreeDelayed),
            other => Err(DomainError::Validation(format!(
                "unknown listing type '{other}'"
            ))),
        }
    }
}

/// Browse grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Kerbside,
    Food,
    #[serde(rename = "Non-food")]
    NonFood,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Kerbside, Self::Food, Self::NonFood];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kerbside => "Kerbside",
            Self::Food => "Food",
            Self::NonFood => "Non-food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    /// Case-insensitive; accepts `non-food` and `nonfood`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kerbside" => Ok(Self::Kerbside),
            "food" => Ok(Self::Food),
            "non-food" | "nonfood" => Ok(Self::NonFood),
            _ => Err(DomainError::Validation(format!("unknown category '{s}'"))),
        }
    }
}

/// A single item available for claim or pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Image URI
    pub image: String,
    /// Free-text suburb or address
    pub location: String,
    pub distance_km: f64,
    /// Display name of whoever posted the listing
    pub owner: String,
    /// For `free` listings, e.g. "10 min ago"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_ago: Option<String>,
    /// For `kerbside` listings, e.g. "4 days left"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_left: Option<String>,
    /// For `freeDelayed` listings, e.g. "Start 10 PM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    /// Remaining claimable quantity. `None` means stock is not tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_left: Option<u32>,
}

impl Listing {
    /// Builds the full record from user input and a freshly issued id.
    pub fn from_new(id: ListingId, input: NewListing) -> Self {
        Self {
            id,
            kind: input.kind,
            category: input.category,
            title: input.title,
            description: input.description,
            image: input.image,
            location: input.location,
            distance_km: input.distance_km,
            owner: input.owner,
            posted_ago: input.posted_ago,
            days_left: input.days_left,
            start_at: input.start_at,
            stock_left: input.stock_left,
        }
    }

    /// The record minus its id.
    pub fn to_new(&self) -> NewListing {
        NewListing {
            kind: self.kind,
            category: self.category,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            location: self.location.clone(),
            distance_km: self.distance_km,
            owner: self.owner.clone(),
            posted_ago: self.posted_ago.clone(),
            days_left: self.days_left.clone(),
            start_at: self.start_at.clone(),
            stock_left: self.stock_left,
        }
    }
}

/// User-entered listing fields, everything except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub image: String,
    pub location: String,
    pub distance_km: f64,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_ago: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_left: Option<u32>,
}

impl NewListing {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(DomainError::Validation(format!(
                "distanceKm must be a non-negative number, got {}",
                self.distance_km
            )));
        }
        Ok(())
    }
}

/// Result of a successful claim ("Snag").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub listing_id: ListingId,
    pub quantity: u32,
    /// Stock after the claim; `None` when the listing does not track stock.
    pub stock_left: Option<u32>,
    pub claimed_at: DateTime<Utc>,
}
