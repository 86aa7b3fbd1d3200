//! Chat session management.
//!
//! A `ChatController` owns the session id and transcript, and sequences
//! questions against the answer endpoint.

mod controller;
mod types;


pub use controller::ChatController;
pub use types::{ChatState, Message, Sender};
