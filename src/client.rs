//! Client configuration and the shared request path used by every endpoint.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod auth;
pub mod builder;
pub mod core;
pub mod endpoint;
pub mod settings;

pub use auth::Authentication;
pub use builder::OpenAiClientBuilder;
pub use core::OpenAiClient;
pub use endpoint::ApiEndpoint;
pub use settings::ClientSettings;
