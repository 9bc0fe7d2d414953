//! In-memory product catalog.

use std::collections::HashMap;

use larder_core::ProductCode;

use crate::product::Product;

/// Mapping from scan code to product record.
///
/// Exclusively owns its records: callers read or replace whole records,
/// never partially mutate shared state. Records are created the first time
/// a code is scanned and never auto-deleted.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: HashMap<ProductCode, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only lookup, no side effects.
    pub fn lookup(&self, code: &ProductCode) -> Option<&Product> {
        self.products.get(code)
    }

    /// Insert or replace the record keyed by `product.code`.
    ///
    /// Field contents are free text and intentionally unvalidated.
    pub fn upsert(&mut self, product: Product) {
        tracing::debug!(code = %product.code, "catalog upsert");
        self.products.insert(product.code.clone(), product);
    }

    /// Whether `code` has a catalog entry.
    ///
    /// Drives the "must prompt for new product" branch in the workflow.
    pub fn is_identified(&self, code: &ProductCode) -> bool {
        self.products.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
