//! Platform session storage.
//!
//! Picks the [`store::KeyValueStore`] backing the auth gate:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Everything else**: an in-process [`store::MemoryStore`], so sessions last
//!   only as long as the process

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub fn platform_store() -> PlatformStore {
    PlatformStore::new()
}
