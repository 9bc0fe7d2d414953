//! Ordered inventory collection.

use larder_core::{DomainError, DomainResult, ItemIdentity};

use crate::item::InventoryItem;

/// Insertion-ordered sequence of inventory items.
///
/// Exclusively owns its records; readers clone values out, nothing is
/// shared mutably with a rendered view. Identity uniqueness is guaranteed
/// by the renewal protocol, but a duplicate is still rejected here as a
/// programming-defect signal rather than silently applied (a duplicate key
/// would corrupt list diffing downstream).
#[derive(Debug, Default)]
pub struct InventoryCollection {
    items: Vec<InventoryItem>,
}

impl InventoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an (already identity-renewed) item.
    pub fn add(&mut self, item: InventoryItem) -> DomainResult<()> {
        if self
            .items
            .iter()
            .any(|existing| existing.identity() == item.identity())
        {
            tracing::error!(identity = %item.identity(), "add rejected: duplicate item identity");
            return Err(DomainError::invariant(format!(
                "duplicate item identity {}",
                item.identity()
            )));
        }

        self.items.push(item);
        Ok(())
    }

    /// Remove the item carrying `identity`.
    ///
    /// Idempotent: removing an absent identity is a no-op, since an undo
    /// may race with a second removal attempt.
    pub fn remove(&mut self, identity: ItemIdentity) {
        self.items.retain(|item| item.identity() != identity);
    }

    pub fn get(&self, identity: ItemIdentity) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.identity() == identity)
    }

    /// Ordered read view (insertion order, no implicit re-sort).
    pub fn all(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
