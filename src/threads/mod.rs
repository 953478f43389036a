//! Assistant threads: client-authored messages and their stored form.

mod client;
mod types;

pub use client::ThreadsEndpoint;
pub use types::{
    ImageFile, Message, MessageContent, MessageList, MessageResponse, Role, TextContent,
};
