//! UseCase 層

mod dispatch_notification;
mod error;

pub use dispatch_notification::{DispatchNotificationUseCase, DispatchOutcome, SkipReason};
pub use error::DispatchError;
