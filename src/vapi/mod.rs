//! Vapi API client.
//!
//! Implements the `AssistantClient` trait against the Vapi session and
//! chat endpoints (https://api.vapi.ai). The client is stateless: the
//! session id is supplied by the caller on every request.

mod api;
mod client;
mod config;

pub use client::VapiClient;
pub use config::VapiConfig;
