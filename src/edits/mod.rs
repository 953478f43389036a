//! Edits: rewrite an input according to an instruction.
//!
//! Deprecated by the provider. Kept for existing integrations; behavior is frozen.

mod client;
mod types;

#[allow(deprecated)]
pub use client::EditsEndpoint;
pub use types::{EditChoice, EditRequest, EditResponse, Usage};
