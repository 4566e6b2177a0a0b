//! Shared application state.

use std::sync::Arc;

use crate::usecase::DispatchNotificationUseCase;

/// Shared application state
pub struct AppState {
    /// DispatchNotificationUseCase（プッシュ通知配信のユースケース）
    pub dispatch_notification_usecase: Arc<DispatchNotificationUseCase>,
}
