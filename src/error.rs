//! Error types for elasticlib

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Elasticlib error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Notification could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Topic lookup failed on the synchronization service
    #[error("Topic unavailable: {0}")]
    TopicUnavailable(String),

    /// Transport rejected the published value
    #[error("Transport error: {0}")]
    Transport(String),
}
