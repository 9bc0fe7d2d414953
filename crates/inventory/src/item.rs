//! Inventory item records and identity renewal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::{ItemIdentity, ProductCode};

/// A physical item in the inventory.
///
/// Immutable value record: the code never changes once set, and identity
/// renewal produces a *new* record rather than reassigning a field in
/// place, so a copy held by a rendered view can never alias a renewed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    identity: ItemIdentity,
    code: ProductCode,
    expiry_date: Option<DateTime<Utc>>,
}

impl InventoryItem {
    /// New item from the scan/entry flow, carrying a fresh identity.
    pub fn new(code: ProductCode, expiry_date: Option<DateTime<Utc>>) -> Self {
        Self {
            identity: ItemIdentity::new(),
            code,
            expiry_date,
        }
    }

    /// Copy of this item under a freshly generated identity.
    ///
    /// Every path that (re-)enters the collection goes through this:
    /// initial commit, re-add after an undone removal, re-add after a
    /// product edit. Renderers key list entries by identity, so an item
    /// re-entering the list must never reuse the token a dismissed widget
    /// was keyed by.
    pub fn renew_identity(&self) -> Self {
        Self {
            identity: ItemIdentity::new(),
            code: self.code.clone(),
            expiry_date: self.expiry_date,
        }
    }

    pub fn identity(&self) -> ItemIdentity {
        self.identity
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }
}
