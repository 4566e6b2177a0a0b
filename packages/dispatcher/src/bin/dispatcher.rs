//! Push notification dispatcher for newly created chat messages.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin missive-dispatcher -- --project-id my-project
//! GOOGLE_CLOUD_PROJECT=my-project MISSIVE_ACCESS_TOKEN=... cargo run --bin missive-dispatcher
//! ```

use std::sync::Arc;

use clap::Parser;
use missive_dispatcher::{
    config::{AuthMode, Config},
    infrastructure::{
        auth::{AccessTokenProvider, MetadataServerTokenProvider, NoAuth, StaticTokenProvider},
        profile_store::FirestoreProfileStore,
        push_gateway::FcmPushGateway,
    },
    ui::Server,
    usecase::DispatchNotificationUseCase,
};
use missive_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize tracing
    setup_logger(
        &[env!("CARGO_PKG_NAME"), "tower_http"],
        &config.log_level,
    );

    // Initialize dependencies in order:
    // 1. HTTP client (shared by all adapters)
    // 2. AccessTokenProvider
    // 3. ProfileStore
    // 4. PushGateway
    // 5. UseCase
    // 6. Server
    let http = reqwest::Client::new();

    let token_provider: Arc<dyn AccessTokenProvider> = match config.auth {
        AuthMode::Metadata => Arc::new(MetadataServerTokenProvider::new(
            http.clone(),
            config.metadata_url.clone(),
        )),
        AuthMode::Token => match config.access_token.clone() {
            Some(token) => Arc::new(StaticTokenProvider::new(token)),
            None => {
                tracing::error!("--auth token requires --access-token");
                std::process::exit(1);
            }
        },
        AuthMode::None => {
            tracing::warn!("Authentication disabled, requests are sent unauthenticated");
            Arc::new(NoAuth)
        }
    };

    let profile_store = Arc::new(FirestoreProfileStore::new(
        http.clone(),
        config.firestore_url.clone(),
        config.project_id.clone(),
        config.database_id.clone(),
        config.users_collection.clone(),
        token_provider.clone(),
    ));

    let push_gateway = Arc::new(FcmPushGateway::new(
        http,
        config.fcm_url.clone(),
        config.project_id.clone(),
        token_provider,
    ));

    let dispatch_notification_usecase = Arc::new(DispatchNotificationUseCase::new(
        profile_store,
        push_gateway,
    ));

    tracing::info!(
        "Reading profiles from '{}' in project '{}'",
        config.users_collection,
        config.project_id
    );

    let server = Server::new(dispatch_notification_usecase);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
