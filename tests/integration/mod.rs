//! Endpoint integration tests against a local mock server

pub mod mock_server;

mod cancellation;
mod edits;
mod threads;
