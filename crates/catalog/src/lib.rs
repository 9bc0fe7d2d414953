//! `larder-catalog` — product metadata and image lookup.
//!
//! Resolves "is this code known", supplies product records for rendering and
//! editing, and defines the lookup contract against the external image store.

pub mod catalog;
pub mod image;
pub mod product;

pub use catalog::ProductCatalog;
pub use image::{ImageHandle, ImageStore, InMemoryImageStore};
pub use product::{Product, capitalize_words};
