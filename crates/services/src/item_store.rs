//! # Item Store
//!
//! Owns the canonical in-memory collection of listings for the current
//! process and bridges it to one persisted snapshot (a JSON array) stored
//! under a single key.
//!
//! Persistence failures never reach the caller: the store logs them and keeps
//! its last good in-memory state.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use domains::seed::seed_listings;
use domains::{
    ClaimReceipt, DomainError, IdSource, KeyValueSlot, Listing, ListingId, NewListing,
    PersistenceError, Result,
};
use tokio::sync::MutexGuard;
use tracing::{debug, info, warn};

use crate::search::ListingFilter;

/// Slot key the mobile client has always used.
pub const DEFAULT_ITEMS_KEY: &str = "items.v1";

/// Attempts to draw an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// What `hydrate` did with the persisted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// The collection was replaced by `count` persisted listings.
    Restored { count: usize },
    /// Nothing stored yet; the collection was left as is.
    NoSnapshot,
    /// The slot was unreadable or held malformed data; the collection was left as is.
    Discarded,
}

pub struct ItemStore {
    slot: Arc<dyn KeyValueSlot>,
    ids: Arc<dyn IdSource>,
    key: String,
    items: RwLock<Vec<Listing>>,
    /// Held by every operation that mutates the collection or touches the
    /// slot, so a hydrate can never replace state an add or claim just wrote.
    write_gate: tokio::sync::Mutex<()>,
}

impl ItemStore {
    pub fn new(slot: Arc<dyn KeyValueSlot>, ids: Arc<dyn IdSource>, seed: Vec<Listing>) -> Self {
        Self {
            slot,
            ids,
            key: DEFAULT_ITEMS_KEY.to_string(),
            items: RwLock::new(dedupe_by_id(seed)),
            write_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// A store starting from the built-in seed listings.
    pub fn with_seed(slot: Arc<dyn KeyValueSlot>, ids: Arc<dyn IdSource>) -> Self {
        Self::new(slot, ids, seed_listings())
    }

    /// Overrides the slot key (defaults to [`DEFAULT_ITEMS_KEY`]).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Listing>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Listing>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot copy of the collection, most recent first.
    pub fn list_all(&self) -> Vec<Listing> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Listing> {
        self.read().iter().find(|l| l.id.as_str() == id).cloned()
    }

    /// Listings matching `filter`, in collection order.
    pub fn search(&self, filter: &ListingFilter) -> Vec<Listing> {
        self.read()
            .iter()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect()
    }

    /// Prepends a new listing and persists the collection.
    ///
    /// The id is returned even when the snapshot write fails.
    pub async fn add_listing(&self, input: NewListing) -> Result<ListingId> {
        input.validate()?;

        let gate = self.write_gate.lock().await;
        let id = {
            let mut items = self.write();
            let id = self.fresh_id(&items)?;
            items.insert(0, Listing::from_new(id.clone(), input));
            id
        };
        debug!(listing_id = %id, "listing added");

        self.persist_or_warn(&gate).await;
        Ok(id)
    }

    /// Takes `quantity` from a listing ("Snag").
    ///
    /// Listings that track `stockLeft` are decremented and the collection is
    /// persisted; listings without stock tracking are claimable as is.
    pub async fn claim(&self, id: &str, quantity: u32) -> Result<ClaimReceipt> {
        if quantity == 0 {
            return Err(DomainError::Validation(
                "claim quantity must be at least 1".into(),
            ));
        }

        let gate = self.write_gate.lock().await;
        let receipt = {
            let mut items = self.write();
            let listing = items
                .iter_mut()
                .find(|l| l.id.as_str() == id)
                .ok_or_else(|| DomainError::NotFound {
                    entity: "listing",
                    id: id.to_string(),
                })?;

            let stock_left = match listing.stock_left {
                Some(available) if quantity > available => {
                    return Err(DomainError::InsufficientStock {
                        requested: quantity,
                        available,
                    });
                }
                Some(available) => {
                    let remaining = available - quantity;
                    listing.stock_left = Some(remaining);
                    Some(remaining)
                }
                None => None,
            };

            ClaimReceipt {
                listing_id: listing.id.clone(),
                quantity,
                stock_left,
                claimed_at: Utc::now(),
            }
        };
        debug!(listing_id = %id, quantity, stock_left = ?receipt.stock_left, "listing claimed");

        if receipt.stock_left.is_some() {
            self.persist_or_warn(&gate).await;
        }
        Ok(receipt)
    }

    /// Restores the collection from the persisted snapshot.
    ///
    /// Absent, unreadable or malformed snapshots leave the current collection
    /// untouched. Safe to call repeatedly.
    pub async fn hydrate(&self) -> HydrateOutcome {
        let _gate = self.write_gate.lock().await;

        match self.load_snapshot().await {
            Ok(Some(listings)) => {
                let count = listings.len();
                *self.write() = listings;
                info!(key = %self.key, count, "listings restored from snapshot");
                HydrateOutcome::Restored { count }
            }
            Ok(None) => {
                debug!(key = %self.key, "no listings snapshot, keeping current collection");
                HydrateOutcome::NoSnapshot
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring listings snapshot");
                HydrateOutcome::Discarded
            }
        }
    }

    fn fresh_id(&self, items: &[Listing]) -> Result<ListingId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !items.iter().any(|l| l.id == id) {
                return Ok(id);
            }
            warn!(listing_id = %id, "id source repeated an existing id");
        }
        Err(DomainError::Conflict(format!(
            "no unused listing id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    /// Parses the slot value as an array and keeps every element that is a
    /// valid listing. Only a value that is not a JSON array, or a non-empty
    /// array with no valid listing at all, counts as corrupt.
    async fn load_snapshot(&self) -> std::result::Result<Option<Vec<Listing>>, PersistenceError> {
        let raw = match self.slot.get(&self.key).await? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };
        let records: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(PersistenceError::Corrupt)?;

        let total = records.len();
        let listings: Vec<Listing> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect();
        let dropped = total - listings.len();
        if dropped > 0 {
            if listings.is_empty() {
                return Err(PersistenceError::NoValidRecords { dropped });
            }
            warn!(key = %self.key, dropped, kept = listings.len(), "skipped malformed listings in snapshot");
        }
        Ok(Some(dedupe_by_id(listings)))
    }

    /// Writes the whole collection as one snapshot.
    ///
    /// Callers hold the write gate, so the snapshot taken here is the latest
    /// state and no other write can interleave.
    async fn persist(&self, _gate: &MutexGuard<'_, ()>) -> std::result::Result<(), PersistenceError> {
        let payload = {
            let items = self.read();
            serde_json::to_string(&*items).map_err(PersistenceError::Serialize)?
        };
        self.slot.set(&self.key, &payload).await?;
        Ok(())
    }

    async fn persist_or_warn(&self, gate: &MutexGuard<'_, ()>) {
        if let Err(err) = self.persist(gate).await {
            warn!(key = %self.key, error = %err, "failed to persist listings, keeping in-memory state");
        }
    }
}

/// Keeps the first occurrence of every id.
fn dedupe_by_id(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::new();
    let before = listings.len();
    let kept: Vec<Listing> = listings
        .into_iter()
        .filter(|l| seen.insert(l.id.clone()))
        .collect();
    if kept.len() < before {
        warn!(dropped = before - kept.len(), "dropped listings with duplicate ids");
    }
    kept
}
