//! # openai-rest
//!
//! 面向游戏引擎等应用运行时的 OpenAI REST API 类型化异步客户端。
//!
//! Typed async client for the OpenAI REST API.
//!
//! ## Overview
//!
//! Every resource group is a thin endpoint: it builds one HTTP request,
//! serializes a typed request value, validates the response, and decodes it
//! into a typed response value. No retries, no caching; every failure goes
//! straight back to the caller.
//!
//! - **Models**: list, retrieve and delete models; a read-only registry of well-known presets
//! - **Edits**: rewrite an input according to an instruction (deprecated by the provider)
//! - **Threads**: create, retrieve and list messages in assistant threads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openai_rest::{models::presets, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> openai_rest::Result<()> {
//!     // Reads OPENAI_API_KEY (and optionally OPENAI_ORGANIZATION_ID / OPENAI_BASE_URL).
//!     let client = OpenAiClient::from_env()?;
//!
//!     for model in client.models().list_models().await? {
//!         println!("{} ({:?})", model, model.owned_by());
//!     }
//!
//!     let gpt4 = presets::get(presets::GPT_4).expect("preset");
//!     println!("default chat model: {}", gpt4);
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Each operation has a `*_with_cancel` variant taking a
//! [`CancellationToken`](tokio_util::sync::CancellationToken). Once the token
//! fires, the in-flight request is dropped and the call returns
//! [`Error::Cancelled`].
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, authentication, settings |
//! | [`models`] | `Model` value, presets, models endpoint |
//! | [`edits`] | Edit request/response and the deprecated edits endpoint |
//! | [`threads`] | Thread messages |
//! | [`transport`] | `reqwest` transport with cancellation |
//! | [`error_code`] | Classification of service errors |

pub mod client;
pub mod edits;
pub mod error_code;
pub mod models;
pub mod threads;
pub mod transport;

pub use client::{Authentication, ClientSettings, OpenAiClient, OpenAiClientBuilder};
pub use error_code::ApiErrorKind;
pub use models::{Model, Permission};
pub use threads::{Message, Role};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
