//! Scripted collaborator doubles.
//!
//! Intended for tests/dev: each request pops the next queued outcome, and
//! an exhausted script cancels. The editor also records the seeds it was
//! launched with, so flows can assert what the form would have shown.

use std::collections::VecDeque;

use async_trait::async_trait;

use larder_catalog::{ImageHandle, Product};
use larder_inventory::InventoryItem;

use crate::collaborators::{ItemScanner, Outcome, ProductEditor};

#[derive(Debug, Default)]
pub struct ScriptedScanner {
    outcomes: VecDeque<Outcome<InventoryItem>>,
}

impl ScriptedScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_item(&mut self, item: InventoryItem) {
        self.outcomes.push_back(Outcome::Completed(item));
    }

    pub fn push_cancel(&mut self) {
        self.outcomes.push_back(Outcome::Cancelled);
    }
}

#[async_trait]
impl ItemScanner for ScriptedScanner {
    async fn request_new_item(&mut self) -> Outcome<InventoryItem> {
        self.outcomes.pop_front().unwrap_or(Outcome::Cancelled)
    }
}

#[derive(Debug, Default)]
pub struct ScriptedEditor {
    outcomes: VecDeque<Outcome<Product>>,
    seeds: Vec<(Product, Option<ImageHandle>)>,
}

impl ScriptedEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_product(&mut self, product: Product) {
        self.outcomes.push_back(Outcome::Completed(product));
    }

    pub fn push_cancel(&mut self) {
        self.outcomes.push_back(Outcome::Cancelled);
    }

    /// The `(seed, image)` pairs the editor has been launched with, in order.
    pub fn seeds(&self) -> &[(Product, Option<ImageHandle>)] {
        &self.seeds
    }
}

#[async_trait]
impl ProductEditor for ScriptedEditor {
    async fn request_product_edit(
        &mut self,
        seed: Product,
        image: Option<ImageHandle>,
    ) -> Outcome<Product> {
        self.seeds.push((seed, image));
        self.outcomes.pop_front().unwrap_or(Outcome::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::ProductCode;

    #[tokio::test]
    async fn exhausted_scripts_cancel() {
        let mut scanner = ScriptedScanner::new();
        assert!(scanner.request_new_item().await.is_cancelled());

        let mut editor = ScriptedEditor::new();
        let seed = Product::unidentified(ProductCode::new("ABC123").unwrap());
        assert!(editor.request_product_edit(seed, None).await.is_cancelled());
        assert_eq!(editor.seeds().len(), 1);
    }

    #[tokio::test]
    async fn outcomes_pop_in_push_order() {
        let mut scanner = ScriptedScanner::new();
        let first = InventoryItem::new(ProductCode::new("first").unwrap(), None);
        scanner.push_item(first.clone());
        scanner.push_cancel();

        assert_eq!(scanner.request_new_item().await, Outcome::Completed(first));
        assert!(scanner.request_new_item().await.is_cancelled());
    }
}
