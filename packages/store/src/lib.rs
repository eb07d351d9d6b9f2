pub mod auth;
pub mod config;
pub mod error;
pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use auth::{AuthGate, Credentials, LoginOutcome};
pub use config::AdminConfig;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use session::{Identity, Session};
