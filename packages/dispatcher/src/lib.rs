//! Push notification dispatcher for chat messages.
//!
//! Reacts to a newly created chat message by looking up the receiver's push
//! tokens and the sender's display name, then sends one multicast notification.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
