use thiserror::Error;

/// Unified error type for the portfolio-tracker-core library.
/// Only the storage layer is fallible; every public facade operation
/// recovers these to a safe default instead of surfacing them.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Storage backend ─────────────────────────────────────────────
    #[error("Storage I/O error: {0}")]
    StorageIo(String),

    #[error("Invalid storage key '{0}': only ASCII letters, digits, '_' and '-' are allowed")]
    InvalidKey(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::StorageIo(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
