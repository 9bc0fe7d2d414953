//! Headless demo shell.
//!
//! Walks a scripted session against the core (add with product entry,
//! remove with undo, product edit) and prints the rendered list as JSON
//! lines. A real UI drives exactly the same surface through its scan and
//! form collaborators.

use anyhow::{Context, Result};
use chrono::Duration;

use larder_catalog::{ImageHandle, InMemoryImageStore, Product, capitalize_words};
use larder_core::{Clock, ProductCode, SystemClock};
use larder_inventory::InventoryItem;
use larder_workflow::{ItemWorkflow, ScriptedEditor, ScriptedScanner};

type Workflow = ItemWorkflow<InMemoryImageStore, SystemClock>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    larder_observability::init();

    let clock = SystemClock;
    let now = clock.now();

    let milk = ProductCode::new("5012345678900")?;
    let beans = ProductCode::new("4007817327321")?;

    let mut images = InMemoryImageStore::new();
    images.insert(milk.clone(), ImageHandle::new("5012345678900_front.jpg"));

    let mut workflow: Workflow = ItemWorkflow::new(images, clock);

    // Two scans: the first code is unknown and the user fills the form in,
    // the second is also unknown but the user bails out of entry (the item
    // commits anyway and renders code-only).
    let mut scanner = ScriptedScanner::new();
    scanner.push_item(InventoryItem::new(milk.clone(), Some(now + Duration::days(10))));
    scanner.push_item(InventoryItem::new(beans.clone(), Some(now + Duration::days(120))));

    // The form normalizes free text the same way the real entry page does.
    let mut editor = ScriptedEditor::new();
    editor.push_product(Product {
        brand: Some(capitalize_words("dairy farm")),
        name: Some(capitalize_words("whole milk")),
        image_file_name: Some("5012345678900_front".to_string()),
        ..Product::unidentified(milk.clone())
    });
    editor.push_cancel();

    let _ = workflow.add_item(&mut scanner, &mut editor).await?;
    let _ = workflow.add_item(&mut scanner, &mut editor).await?;

    tracing::info!("after two scans");
    render(&workflow)?;

    // Leading-edge swipe on the milk, then undo before the prompt expires.
    let milk_entry = workflow.entries()[0].item.clone();
    let removed = workflow.dismiss_remove(&milk_entry);
    tracing::info!(product = removed.product_name().unwrap_or("<unidentified>"), "undo prompt shown");
    workflow.undo_remove(removed)?;

    // Trailing-edge swipe on the beans: identify them after the fact.
    let beans_entry = workflow
        .entries()
        .iter()
        .find(|entry| entry.item.code() == &beans)
        .map(|entry| entry.item.clone())
        .context("beans item is live")?;

    let mut edit = ScriptedEditor::new();
    edit.push_product(Product {
        brand: Some(capitalize_words("roastery")),
        name: Some(capitalize_words("espresso beans")),
        variant: Some("1kg".to_string()),
        ..Product::unidentified(beans.clone())
    });
    workflow.dismiss_edit(&beans_entry, &mut edit).await?;

    tracing::info!("after undo and product edit");
    render(&workflow)?;

    Ok(())
}

fn render(workflow: &Workflow) -> Result<()> {
    for entry in workflow.entries() {
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}
