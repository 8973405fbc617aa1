//! OAuth2 JWT-bearer flow for service accounts.
//!
//! The client signs an RS256 assertion with the service-account key and
//! posts it to the key's `token_uri`, receiving a short-lived bearer token.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::credentials::ServiceAccountKey;
use crate::error::SheetsApiError;

/// Read-only access to spreadsheet values.
pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Grant type for exchanging a signed assertion.
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime in seconds (Google's maximum).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the signed assertion.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssertionClaims {
    /// Issuer -- the service account's email.
    pub iss: String,
    /// Space-separated OAuth scopes.
    pub scope: String,
    /// Audience -- the token endpoint.
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Successful token endpoint response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Sign an RS256 assertion for `scope` with the service-account key.
pub fn build_assertion(
    key: &ServiceAccountKey,
    scope: &str,
    now: i64,
) -> Result<String, SheetsApiError> {
    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: scope.to_string(),
        aud: key.token_uri.clone(),
        exp: now + ASSERTION_LIFETIME_SECS,
        iat: now,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&header, &claims, &signing_key)?)
}

/// Exchange a signed assertion for an access token.
pub async fn fetch_access_token(
    client: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<TokenResponse, SheetsApiError> {
    let now = chrono::Utc::now().timestamp();
    let assertion = build_assertion(key, SHEETS_READONLY_SCOPE, now)?;

    tracing::debug!(token_uri = %key.token_uri, client_email = %key.client_email, "Requesting access token");

    let response = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(SheetsApiError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json::<TokenResponse>().await?)
}
