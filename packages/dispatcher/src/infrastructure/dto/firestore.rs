//! Firestore REST document DTOs.
//!
//! Only the value kinds the profile store reads are modeled; other kinds
//! deserialize with every field `None`.

use std::collections::HashMap;

use serde::Deserialize;

/// `projects/{p}/databases/{d}/documents/{collection}/{id}` resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirestoreDocument {
    /// Absent when the document has no fields at all.
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreValue {
    pub string_value: Option<String>,
    pub array_value: Option<FirestoreArrayValue>,
}

/// An empty array is sent as `{"arrayValue": {}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirestoreArrayValue {
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}
