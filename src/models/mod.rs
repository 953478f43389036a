//! Model values, the preset registry, and the models endpoint.

mod client;
pub mod presets;
mod types;

pub use client::{DeleteModelResponse, ModelList, ModelsEndpoint};
pub use types::{Model, Permission};
