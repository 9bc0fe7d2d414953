//! Image store adapter contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use larder_core::ProductCode;

/// Opaque handle to an image held by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(String);

impl ImageHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolves a scan code to its associated image, if any.
///
/// Consumed at render time and when seeding the product edit form. A miss
/// means code-only / no-image rendering, never a failure.
pub trait ImageStore {
    fn resolve_image(&self, code: &ProductCode) -> Option<ImageHandle>;
}

/// In-memory image store.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    images: HashMap<ProductCode, ImageHandle>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: ProductCode, handle: ImageHandle) {
        self.images.insert(code, handle);
    }
}

impl ImageStore for InMemoryImageStore {
    fn resolve_image(&self, code: &ProductCode) -> Option<ImageHandle> {
        self.images.get(code).cloned()
    }
}
