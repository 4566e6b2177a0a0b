//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::DispatchNotificationUseCase;

use super::{
    handler::{handle_message_created, health_check},
    signal::shutdown_signal,
    state::AppState,
};

/// Event endpoint route; path parameters mirror the document path.
pub const MESSAGE_CREATED_ROUTE: &str = "/events/chat-rooms/{chat_room_id}/messages/{message_id}";

/// HTTP server receiving message creation events
///
/// # Example
///
/// ```ignore
/// let server = Server::new(dispatch_notification_usecase);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// DispatchNotificationUseCase（プッシュ通知配信のユースケース）
    dispatch_notification_usecase: Arc<DispatchNotificationUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(dispatch_notification_usecase: Arc<DispatchNotificationUseCase>) -> Self {
        Self {
            dispatch_notification_usecase,
        }
    }

    /// Build the router without binding a listener
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            dispatch_notification_usecase: self.dispatch_notification_usecase,
        });

        Router::new()
            // イベントエンドポイント
            .route(MESSAGE_CREATED_ROUTE, post(handle_message_created))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the server until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "Notification dispatcher listening on {}",
            listener.local_addr()?
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
