use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLog};
use stockroom_core::{DomainError, DomainResult};

/// Threshold used by callers that have no better opinion.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory inventory: item name -> units held.
///
/// An item absent from the mapping holds quantity zero. The store is owned
/// by the caller and carries no locking; callers sharing it across threads
/// must synchronize externally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-validated entries (persistence path).
    pub(crate) fn from_items(items: BTreeMap<String, i64>) -> Self {
        Self { items }
    }

    /// Add `qty` units of `item`, appending a timestamped entry to `log` on
    /// success and returning the new quantity.
    ///
    /// `qty` carries no sign constraint; a negative delta sums like any
    /// other. A blank item name is rejected without touching the store or
    /// the log.
    pub fn add(&mut self, item: &str, qty: i64, log: &mut AuditLog) -> DomainResult<i64> {
        if item.trim().is_empty() {
            tracing::warn!(qty, "rejected add: blank item name");
            return Err(DomainError::validation("item name cannot be empty"));
        }

        let held = self.items.entry(item.to_string()).or_insert(0);
        *held += qty;
        let total = *held;

        log.push(AuditEntry::added(Utc::now(), item, qty));
        tracing::info!(item, qty, total, "added stock");
        Ok(total)
    }

    /// Remove `qty` units of `item`.
    ///
    /// Removing at or beyond the held quantity deletes the entry outright
    /// rather than leaving a zero or negative balance. An unknown item is a
    /// `NotFound` error and leaves the store unchanged.
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<()> {
        let Some(held) = self.items.get_mut(item) else {
            let err = DomainError::not_found(item);
            tracing::error!(qty, "error removing item: {err}");
            return Err(err);
        };

        *held -= qty;
        if *held <= 0 {
            self.items.remove(item);
        }

        tracing::info!(item, qty, "removed stock");
        Ok(())
    }

    /// Units held for `item`; zero when absent.
    pub fn quantity_of(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items holding strictly fewer units than `threshold`, in name order.
    pub fn low_stock(&self, threshold: i64) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }
}
