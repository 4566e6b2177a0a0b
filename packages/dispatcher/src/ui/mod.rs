//! HTTP transport adapter.
//!
//! Turns message creation events delivered over HTTP into use case calls.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
