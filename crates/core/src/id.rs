//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identity of an inventory item *instance*, independent of its scan code.
///
/// List renderers key their entries by this token, so an item that re-enters
/// the collection (undo, product edit) must carry a fresh one. See
/// `InventoryItem::renew_identity` in `larder-inventory`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIdentity(Uuid);

impl ItemIdentity {
    /// Generate a fresh identity.
    ///
    /// Uses UUIDv7 (time-ordered), collision-free across the process
    /// lifetime. Prefer constructing identities from fixed UUIDs in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ItemIdentity {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ItemIdentity> for Uuid {
    fn from(value: ItemIdentity) -> Self {
        value.0
    }
}

impl FromStr for ItemIdentity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::validation(format!("ItemIdentity: {e}")))?;
        Ok(Self(uuid))
    }
}
