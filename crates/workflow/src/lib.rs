//! `larder-workflow` — item entry/removal orchestration.
//!
//! Drives the add → (identify product if unknown) → commit sequence and the
//! remove → undo / edit-product → re-commit sequence over a single state
//! owner. Sequential and cooperatively suspending: the two collaborator
//! awaits are the only suspension points, and one item is processed
//! end-to-end before the next user action is accepted.

pub mod collaborators;
pub mod controller;
pub mod scripted;
pub mod state;

pub use collaborators::{ItemScanner, Outcome, ProductEditor};
pub use controller::{ItemWorkflow, ListEntry, RemovedItem};
pub use scripted::{ScriptedEditor, ScriptedScanner};
pub use state::AppState;
