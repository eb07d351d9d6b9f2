use thiserror::Error;

/// Failures while reading or writing locally persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The browser refused access to `localStorage` (private mode, disabled storage).
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to write key `{key}`")]
    Write { key: String },

    #[error("failed to remove key `{key}`")]
    Remove { key: String },

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}
