//! Async collaborator contracts.
//!
//! The scan/entry and product-entry/edit interactions are modeled as
//! futures resolving to a tagged [`Outcome`], never as errors: user
//! cancellation is a normal terminal result, and the workflow's branching
//! on it stays explicit and testable without a UI harness.

use async_trait::async_trait;

use larder_catalog::{ImageHandle, Product};
use larder_inventory::InventoryItem;

/// Result of a user-cancellable interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// Scan/entry collaborator.
///
/// Yields a candidate item (code plus optional expiry, identity not yet
/// final), or `Cancelled` when the user backs out.
#[async_trait]
pub trait ItemScanner {
    async fn request_new_item(&mut self) -> Outcome<InventoryItem>;
}

/// Product entry/edit collaborator.
///
/// Launched seeded with the current record (or an unidentified seed) and
/// the resolved image; resolves to the edited record, or `Cancelled`.
#[async_trait]
pub trait ProductEditor {
    async fn request_product_edit(
        &mut self,
        seed: Product,
        image: Option<ImageHandle>,
    ) -> Outcome<Product>;
}
