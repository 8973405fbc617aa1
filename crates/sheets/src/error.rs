/// Errors from the Google Sheets client layer.
#[derive(Debug, thiserror::Error)]
pub enum SheetsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Google returned a non-2xx status code.
    #[error("Sheets API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service-account key could not be read or parsed.
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    /// Signing the JWT assertion failed (usually a malformed private key).
    #[error("Failed to sign token assertion: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
