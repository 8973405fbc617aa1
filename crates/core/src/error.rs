#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to fetch range {range}: {message}")]
    Fetch { range: String, message: String },

    #[error("Title sheet has no usable row: {0}")]
    MissingTitle(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
