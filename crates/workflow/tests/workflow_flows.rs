//! Black-box flows through the item workflow, driven the way a UI would
//! drive it: scripted scan and edit collaborators, a pinned clock, and
//! assertions only against the public surface.

use chrono::{DateTime, Duration, TimeZone, Utc};

use larder_catalog::{ImageHandle, InMemoryImageStore, Product};
use larder_core::{FixedClock, ProductCode};
use larder_inventory::{InventoryItem, UrgencyTier};
use larder_workflow::{ItemWorkflow, ScriptedEditor, ScriptedScanner};

fn code(s: &str) -> ProductCode {
    ProductCode::new(s).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn workflow() -> ItemWorkflow<InMemoryImageStore, FixedClock> {
    ItemWorkflow::new(InMemoryImageStore::new(), FixedClock(now()))
}

/// First scan of an unknown code: prompt for the product, commit the item,
/// classify against the expiry.
#[tokio::test]
async fn first_scan_identifies_and_commits() {
    let mut workflow = workflow();

    let mut scanner = ScriptedScanner::new();
    scanner.push_item(InventoryItem::new(
        code("ABC123"),
        Some(now() + Duration::days(10)),
    ));

    let mut editor = ScriptedEditor::new();
    editor.push_product(Product {
        name: Some("Milk".to_string()),
        ..Product::unidentified(code("ABC123"))
    });

    let committed = workflow.add_item(&mut scanner, &mut editor).await.unwrap();
    assert!(committed.is_some());

    assert!(workflow.state().catalog.is_identified(&code("ABC123")));

    let entries = workflow.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item.code(), &code("ABC123"));
    assert_eq!(entries[0].tier, UrgencyTier::Critical);
    assert_eq!(
        entries[0].product.as_ref().and_then(|p| p.name.as_deref()),
        Some("Milk")
    );
}

/// A full session: two adds, a remove with undo, then a product edit.
/// Identities stay pairwise distinct and insertion order is preserved
/// throughout.
#[tokio::test]
async fn session_preserves_order_and_identity_uniqueness() {
    let mut images = InMemoryImageStore::new();
    images.insert(code("ABC123"), ImageHandle::new("ABC123_a1.jpg"));
    let mut workflow = ItemWorkflow::new(images, FixedClock(now()));

    let mut scanner = ScriptedScanner::new();
    scanner.push_item(InventoryItem::new(
        code("ABC123"),
        Some(now() + Duration::days(10)),
    ));
    scanner.push_item(InventoryItem::new(
        code("XYZ789"),
        Some(now() + Duration::days(60)),
    ));

    let mut editor = ScriptedEditor::new();
    editor.push_product(Product {
        name: Some("Milk".to_string()),
        ..Product::unidentified(code("ABC123"))
    });
    // Second code: the user bails out of product entry; the item commits
    // anyway and renders code-only.
    editor.push_cancel();

    let _ = workflow.add_item(&mut scanner, &mut editor).await.unwrap();
    let _ = workflow.add_item(&mut scanner, &mut editor).await.unwrap();

    assert_eq!(workflow.state().inventory.len(), 2);
    assert!(!workflow.state().catalog.is_identified(&code("XYZ789")));

    // Leading-edge dismiss on the first item, then undo.
    let first = workflow.entries()[0].item.clone();
    let first_identity = first.identity();
    let removed = workflow.dismiss_remove(&first);
    assert_eq!(removed.product_name(), Some("Milk"));
    assert_eq!(workflow.state().inventory.len(), 1);

    let restored = workflow.undo_remove(removed).unwrap();
    assert_ne!(restored, first_identity);
    assert_eq!(workflow.state().inventory.len(), 2);

    // The undone item re-enters at the back: insertion order, no re-sort.
    let codes: Vec<String> = workflow
        .entries()
        .iter()
        .map(|entry| entry.item.code().as_str().to_string())
        .collect();
    assert_eq!(codes, vec!["XYZ789".to_string(), "ABC123".to_string()]);

    // Trailing-edge dismiss on the restored item: edit the product.
    let target = workflow.entries()[1].item.clone();
    let mut edit = ScriptedEditor::new();
    edit.push_product(Product {
        name: Some("Oat Milk".to_string()),
        ..Product::unidentified(code("ABC123"))
    });
    let readded = workflow.dismiss_edit(&target, &mut edit).await.unwrap();
    assert_ne!(readded, target.identity());

    // Edit was seeded with the live record and its image.
    let (seed, image) = &edit.seeds()[0];
    assert_eq!(seed.name.as_deref(), Some("Milk"));
    assert_eq!(image.as_ref().map(|h| h.as_str()), Some("ABC123_a1.jpg"));

    // Net state: both items live, identities pairwise distinct.
    let entries = workflow.entries();
    assert_eq!(entries.len(), 2);
    assert_ne!(entries[0].item.identity(), entries[1].item.identity());
    assert_eq!(
        workflow
            .state()
            .catalog
            .lookup(&code("ABC123"))
            .and_then(|p| p.name.as_deref()),
        Some("Oat Milk")
    );
}

/// Cancelling the edit keeps exactly one item with the original code in
/// the collection and leaves the catalog entry untouched.
#[tokio::test]
async fn cancelled_edit_never_loses_the_item() {
    let mut workflow = workflow();

    let mut scanner = ScriptedScanner::new();
    scanner.push_item(InventoryItem::new(code("ABC123"), None));
    let mut editor = ScriptedEditor::new();
    editor.push_product(Product {
        name: Some("Milk".to_string()),
        ..Product::unidentified(code("ABC123"))
    });
    let _ = workflow.add_item(&mut scanner, &mut editor).await.unwrap();

    let before = workflow.state().catalog.lookup(&code("ABC123")).cloned();

    let target = workflow.entries()[0].item.clone();
    let mut edit = ScriptedEditor::new();
    edit.push_cancel();
    workflow.dismiss_edit(&target, &mut edit).await.unwrap();

    let entries = workflow.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item.code(), &code("ABC123"));
    assert_eq!(
        workflow.state().catalog.lookup(&code("ABC123")),
        before.as_ref()
    );
}
