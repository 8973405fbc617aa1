//! Service-account key file loading.

use std::path::Path;

use serde::Deserialize;

use crate::error::SheetsApiError;

/// Token endpoint used when the key file does not name one.
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The fields of a Google service-account JSON key that the client needs.
///
/// Other fields in the file (`project_id`, `client_id`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    /// PEM-encoded RSA private key.
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Parse a key from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, SheetsApiError> {
        serde_json::from_str(json)
            .map_err(|e| SheetsApiError::Credentials(format!("malformed key file: {e}")))
    }

    /// Read and parse a key file.
    pub async fn from_file(path: &Path) -> Result<Self, SheetsApiError> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            SheetsApiError::Credentials(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }
}
