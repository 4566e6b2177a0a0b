//! ProfileStore の実装
//!
//! - `firestore`: Firestore REST API を使った実装
//! - `inmemory`: HashMap を使った実装（テスト・ローカル実行用）

pub mod firestore;
pub mod inmemory;

pub use firestore::FirestoreProfileStore;
pub use inmemory::InMemoryProfileStore;
