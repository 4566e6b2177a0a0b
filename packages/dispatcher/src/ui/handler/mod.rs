//! HTTP endpoint handlers.

mod event;
mod http;

pub use event::handle_message_created;
pub use http::health_check;
