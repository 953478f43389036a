//! Well-known models, available without a client.
//!
//! The registry is built once on first access and is read-only afterwards.
//!
//! ```rust
//! use openai_rest::models::presets;
//!
//! let model = presets::get(presets::GPT_4).unwrap();
//! assert_eq!(model.owned_by(), Some("openai"));
//! ```

use super::types::Model;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const OWNER: &str = "openai";

/// More capable than any GPT-3.5 model and optimized for chat.
pub const GPT_4: &str = "gpt-4";
pub const GPT_4_TURBO: &str = "gpt-4-turbo";
/// `gpt-4` with 4x the context length.
pub const GPT_4_32K: &str = "gpt-4-32k";
pub const GPT_3_5_TURBO: &str = "gpt-3.5-turbo";
/// `gpt-3.5-turbo` with 4x the context length.
pub const GPT_3_5_TURBO_16K: &str = "gpt-3.5-turbo-16k";
pub const DAVINCI: &str = "text-davinci-003";
/// Default model for edit requests.
pub const DAVINCI_EDIT: &str = "text-davinci-edit-001";
pub const CURIE: &str = "text-curie-001";
pub const BABBAGE: &str = "text-babbage-001";
pub const ADA: &str = "text-ada-001";
/// Default model for embeddings.
pub const EMBEDDING_ADA_002: &str = "text-embedding-ada-002";
/// Default model for audio transcription and translation.
pub const WHISPER_1: &str = "whisper-1";
pub const MODERATION_LATEST: &str = "text-moderation-latest";
/// Default model for speech synthesis.
pub const TTS_1: &str = "tts-1";
pub const TTS_1_HD: &str = "tts-1-hd";
/// Default model for image generation.
pub const DALL_E_2: &str = "dall-e-2";
pub const DALL_E_3: &str = "dall-e-3";

const PRESET_IDS: [&str; 17] = [
    GPT_4,
    GPT_4_TURBO,
    GPT_4_32K,
    GPT_3_5_TURBO,
    GPT_3_5_TURBO_16K,
    DAVINCI,
    DAVINCI_EDIT,
    CURIE,
    BABBAGE,
    ADA,
    EMBEDDING_ADA_002,
    WHISPER_1,
    MODERATION_LATEST,
    TTS_1,
    TTS_1_HD,
    DALL_E_2,
    DALL_E_3,
];

static REGISTRY: Lazy<BTreeMap<&'static str, Model>> = Lazy::new(|| {
    PRESET_IDS
        .iter()
        .map(|id| (*id, Model::preset(id, OWNER)))
        .collect()
});

/// Look up a preset by id.
pub fn get(id: &str) -> Option<&'static Model> {
    REGISTRY.get(id)
}

/// All presets, ordered by id.
pub fn all() -> impl Iterator<Item = &'static Model> {
    REGISTRY.values()
}

pub fn contains(id: &str) -> bool {
    REGISTRY.contains_key(id)
}
