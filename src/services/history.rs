use std::collections::HashSet;

use crate::models::ProductId;

/// Viewed product ids in view order, with constant-time membership
#[derive(Debug, Clone, Default)]
pub struct BrowsingHistoryStore {
    order: Vec<ProductId>,
    index: HashSet<ProductId>,
}

impl BrowsingHistoryStore {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a host-supplied snapshot, dropping repeats
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut store = Self::new();
        for id in ids {
            store.record(id);
        }
        store
    }

    /// Appends an id; returns false if it was already recorded
    pub fn record(&mut self, id: ProductId) -> bool {
        if self.index.contains(&id) {
            return false;
        }
        self.index.insert(id.clone());
        self.order.push(id);
        true
    }

    /// Whether the product has been viewed
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains(id)
    }

    /// Viewed ids, oldest first. May include ids the catalog no longer has.
    pub fn list(&self) -> &[ProductId] {
        &self.order
    }

    /// Forgets every viewed id; later queries see an empty history
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    /// Number of distinct viewed ids
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
