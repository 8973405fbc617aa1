//! REST client for the Sheets v4 `values.get` endpoint.
//!
//! [`SheetsApi`] holds a bearer token obtained once at connect time and
//! implements [`RowSource`] so the import pipeline never sees HTTP.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use sheetplay_core::cell::Table;
use sheetplay_core::error::CoreError;
use sheetplay_core::ports::RowSource;

use crate::auth;
use crate::credentials::ServiceAccountKey;
use crate::error::SheetsApiError;

/// Production Sheets API host.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// HTTP client bound to one spreadsheet.
#[derive(Debug)]
pub struct SheetsApi {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    access_token: String,
}

/// Body of a `values.get` response.
///
/// Google leaves `values` out entirely when the range holds no data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Table,
}

impl SheetsApi {
    /// Create a client from an already-issued access token.
    pub fn new(base_url: String, spreadsheet_id: String, access_token: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, spreadsheet_id, access_token)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        spreadsheet_id: String,
        access_token: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id,
            access_token,
        }
    }

    /// Load the service-account key at `credentials_path`, exchange it for
    /// an access token, and return a ready client.
    pub async fn connect(
        credentials_path: &Path,
        base_url: String,
        spreadsheet_id: String,
    ) -> Result<Self, SheetsApiError> {
        let key = ServiceAccountKey::from_file(credentials_path).await?;
        let client = reqwest::Client::new();
        let token = auth::fetch_access_token(&client, &key).await?;

        tracing::info!(
            client_email = %key.client_email,
            expires_in = ?token.expires_in,
            "Sheets API client authenticated",
        );

        Ok(Self::with_client(
            client,
            base_url,
            spreadsheet_id,
            token.access_token,
        ))
    }

    /// Fetch the cells of a named range, e.g. `characters!A2:D`.
    ///
    /// Sends `GET /v4/spreadsheets/{id}/values/{range}` with the bearer
    /// token. A range with no data yields an empty table.
    pub async fn get_values(&self, range: &str) -> Result<ValueRange, SheetsApiError> {
        let url = self.values_url(range)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Build the `values.get` URL, percent-encoding the range as a
    /// single path segment.
    pub fn values_url(&self, range: &str) -> Result<reqwest::Url, SheetsApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| SheetsApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| SheetsApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", &self.spreadsheet_id, "values", range]);

        Ok(url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, then decode JSON.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SheetsApiError> {
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
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RowSource for SheetsApi {
    async fn fetch(&self, range: &str) -> Result<Table, CoreError> {
        match self.get_values(range).await {
            Ok(value_range) => {
                tracing::debug!(range = %range, rows = value_range.values.len(), "Fetched range");
                Ok(value_range.values)
            }
            Err(e) => Err(CoreError::Fetch {
                range: range.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
