//! # Key-value persistence
//!
//! The console persists exactly two string values between page reloads (the auth
//! token placeholder and the serialized identity). [`KeyValueStore`] is the seam
//! between that logic and the platform storage:
//!
//! | Implementation | Platform |
//! |----------------|----------|
//! | [`crate::MemoryStore`] | tests, native builds |
//! | `LocalStorageStore` | browser `window.localStorage` (wasm32 + `web` feature) |
//!
//! Reads are infallible from the caller's point of view: an unavailable backend
//! reads as "no value", which the auth gate treats as "not signed in".

use crate::StoreError;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
