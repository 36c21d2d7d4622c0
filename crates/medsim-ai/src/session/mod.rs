//! Conversation session management.
//!
//! A `ConversationSession` holds the turn history, bounds the slice of it
//! replayed into each request, and turns every API outcome into a reply
//! string the caller can print.

mod chat;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::{Reply, SessionConfig, Turn, EMPTY_INPUT_REPLY, EMPTY_REPLY_FALLBACK};
