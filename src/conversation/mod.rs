//! Conversation state management.
//!
//! A `Conversation` owns the ordered transcript and the lazily-created
//! remote session, and serializes user turns through `submit`.

mod controller;
mod types;

pub use controller::Conversation;
