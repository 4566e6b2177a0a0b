//! Process configuration.
//!
//! Every option can be given as a flag or through the environment.

use clap::{Parser, ValueEnum};
use reqwest::Url;

use crate::infrastructure::auth::metadata::DEFAULT_METADATA_URL;

/// How Firestore and FCM requests are authenticated
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Service account token from the GCE / Cloud Run metadata server, refreshed before expiry
    Metadata,
    /// Fixed token from `--access-token` (never refreshed)
    Token,
    /// No Authorization header (local emulator)
    None,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "missive-dispatcher")]
#[command(about = "Sends a push notification for every newly created chat message", long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "MISSIVE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Google Cloud project hosting Firestore and FCM
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    /// How requests to Firestore and FCM are authenticated
    #[arg(long, env = "MISSIVE_AUTH", value_enum, default_value_t = AuthMode::Metadata)]
    pub auth: AuthMode,

    /// OAuth2 access token, required with `--auth token`
    #[arg(
        long,
        env = "MISSIVE_ACCESS_TOKEN",
        hide_env_values = true,
        required_if_eq("auth", "token")
    )]
    pub access_token: Option<String>,

    /// Metadata server base URL used with `--auth metadata`
    #[arg(
        long,
        env = "MISSIVE_METADATA_URL",
        default_value = DEFAULT_METADATA_URL
    )]
    pub metadata_url: Url,

    /// Firestore REST API base URL
    #[arg(
        long,
        env = "MISSIVE_FIRESTORE_URL",
        default_value = "https://firestore.googleapis.com/v1/"
    )]
    pub firestore_url: Url,

    /// FCM HTTP v1 API base URL
    #[arg(
        long,
        env = "MISSIVE_FCM_URL",
        default_value = "https://fcm.googleapis.com/v1/"
    )]
    pub fcm_url: Url,

    /// Firestore database ID
    #[arg(long, env = "MISSIVE_DATABASE_ID", default_value = "(default)")]
    pub database_id: String,

    /// Collection holding user profiles
    #[arg(long, env = "MISSIVE_USERS_COLLECTION", default_value = "users")]
    pub users_collection: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "MISSIVE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
