//! Application state owner.

use larder_catalog::ProductCatalog;
use larder_inventory::InventoryCollection;

/// Single owner of the live collection and the product catalog.
///
/// Constructed once at startup and passed explicitly to its consumers;
/// nothing in the core reaches for ambient global state. All mutation
/// happens from the workflow controller's single sequential flow, so no
/// locking discipline is required.
#[derive(Debug, Default)]
pub struct AppState {
    pub inventory: InventoryCollection,
    pub catalog: ProductCatalog,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
