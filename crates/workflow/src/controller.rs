//! Item workflow controller.

use serde::Serialize;

use larder_catalog::{ImageHandle, ImageStore, Product};
use larder_core::{Clock, DomainResult, ItemIdentity};
use larder_inventory::{InventoryItem, UrgencyTier, classify};

use crate::collaborators::{ItemScanner, Outcome, ProductEditor};
use crate::state::AppState;

/// Undo affordance for a removed item.
///
/// References the removed record and its product name so the UI can word
/// the prompt ("Removed item Milk", with an UNDO action). Re-adding goes
/// through identity renewal; the pre-removal identity is never reused.
#[derive(Debug, Clone)]
pub struct RemovedItem {
    item: InventoryItem,
    product_name: Option<String>,
}

impl RemovedItem {
    pub fn item(&self) -> &InventoryItem {
        &self.item
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }
}

/// One rendered row: the item joined with its catalog product, resolved
/// image, and urgency tier. Product and image misses are normal (code-only
/// / no-image rendering).
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub item: InventoryItem,
    pub product: Option<Product>,
    pub image: Option<ImageHandle>,
    pub tier: UrgencyTier,
}

/// Orchestrates item entry, removal, undo, and product editing over a
/// single [`AppState`].
///
/// One sequential flow: suspension happens only while awaiting the scan or
/// the product-entry/edit collaborator, and every mutation of the state
/// owner is issued from this controller.
pub struct ItemWorkflow<I, C> {
    state: AppState,
    images: I,
    clock: C,
}

impl<I, C> ItemWorkflow<I, C>
where
    I: ImageStore,
    C: Clock,
{
    pub fn new(images: I, clock: C) -> Self {
        Self {
            state: AppState::new(),
            images,
            clock,
        }
    }

    pub fn with_state(state: AppState, images: I, clock: C) -> Self {
        Self {
            state,
            images,
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Add flow: scan → (identify product if unknown) → commit.
    ///
    /// Returns the committed identity, or `None` when the scan itself was
    /// cancelled. Cancelling *product entry* skips the catalog write but
    /// still commits the item: an unidentified code renders code-only until
    /// a later edit identifies it.
    pub async fn add_item<S, E>(
        &mut self,
        scanner: &mut S,
        editor: &mut E,
    ) -> DomainResult<Option<ItemIdentity>>
    where
        S: ItemScanner + Send,
        E: ProductEditor + Send,
    {
        let item = match scanner.request_new_item().await {
            Outcome::Completed(item) => item,
            Outcome::Cancelled => {
                tracing::debug!("scan cancelled, no state change");
                return Ok(None);
            }
        };

        if !self.state.catalog.is_identified(item.code()) {
            let seed = Product::unidentified(item.code().clone());
            match editor.request_product_edit(seed, None).await {
                Outcome::Completed(product) => self.state.catalog.upsert(product),
                Outcome::Cancelled => {
                    tracing::debug!(code = %item.code(), "product entry cancelled, committing unidentified");
                }
            }
        }

        self.commit(item).map(Some)
    }

    /// Leading-edge dismiss: remove the item, handing back the undo
    /// affordance. Removal is idempotent, so a stale dismiss is harmless.
    pub fn dismiss_remove(&mut self, item: &InventoryItem) -> RemovedItem {
        self.state.inventory.remove(item.identity());
        let product_name = self
            .state
            .catalog
            .lookup(item.code())
            .and_then(|product| product.name.clone());

        tracing::info!(identity = %item.identity(), code = %item.code(), "item removed");

        RemovedItem {
            item: item.clone(),
            product_name,
        }
    }

    /// Undo a removal before the affordance expires.
    pub fn undo_remove(&mut self, removed: RemovedItem) -> DomainResult<ItemIdentity> {
        self.commit(removed.item)
    }

    /// Trailing-edge dismiss: optimistic removal, product edit, re-commit.
    ///
    /// The item re-enters the collection on completion *and* on cancel;
    /// cancelling only skips the catalog write. Nothing is ever lost
    /// through this path.
    pub async fn dismiss_edit<E>(
        &mut self,
        item: &InventoryItem,
        editor: &mut E,
    ) -> DomainResult<ItemIdentity>
    where
        E: ProductEditor + Send,
    {
        self.state.inventory.remove(item.identity());

        let seed = self
            .state
            .catalog
            .lookup(item.code())
            .cloned()
            .unwrap_or_else(|| Product::unidentified(item.code().clone()));
        let image = self.images.resolve_image(item.code());

        match editor.request_product_edit(seed, image).await {
            Outcome::Completed(edited) => self.state.catalog.upsert(edited),
            Outcome::Cancelled => {
                tracing::debug!(code = %item.code(), "product edit cancelled, catalog unchanged");
            }
        }

        self.commit(item.clone())
    }

    /// Rendered read view: one entry per live item, in insertion order,
    /// classified against the injected clock.
    pub fn entries(&self) -> Vec<ListEntry> {
        let now = self.clock.now();
        self.state
            .inventory
            .all()
            .iter()
            .map(|item| ListEntry {
                product: self.state.catalog.lookup(item.code()).cloned(),
                image: self.images.resolve_image(item.code()),
                tier: classify(item.expiry_date(), now),
                item: item.clone(),
            })
            .collect()
    }

    /// Renew identity and append: the single entry point into the
    /// collection, shared by initial commit, undo, and edit re-add.
    fn commit(&mut self, item: InventoryItem) -> DomainResult<ItemIdentity> {
        let renewed = item.renew_identity();
        let identity = renewed.identity();
        self.state.inventory.add(renewed)?;
        tracing::info!(identity = %identity, "item committed");
        Ok(identity)
    }
}
