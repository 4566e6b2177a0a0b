//! Google API error envelope.
//!
//! Firestore and FCM both report failures as
//! `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND", "details": [...]}}`.
//! The numeric `code` duplicates the HTTP status and is not read.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleApiErrorResponse {
    pub error: GoogleApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleApiError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Vec<GoogleApiErrorDetail>,
}

/// Only `errorCode` is read (FCM puts `UNREGISTERED` etc. there).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleApiErrorDetail {
    pub error_code: Option<String>,
}

impl GoogleApiError {
    /// Most specific error code available: the FCM `errorCode` detail, then `status`.
    pub fn error_code(&self) -> String {
        self.details
            .iter()
            .find_map(|d| d.error_code.clone())
            .unwrap_or_else(|| self.status.clone())
    }
}

/// Parse an error body, falling back to the raw text when it is not a Google error envelope.
pub fn parse_error_body(status: u16, body: &str) -> GoogleApiError {
    serde_json::from_str::<GoogleApiErrorResponse>(body)
        .map(|r| r.error)
        .unwrap_or_else(|_| GoogleApiError {
            message: body.to_string(),
            status: format!("HTTP_{}", status),
            details: vec![],
        })
}
