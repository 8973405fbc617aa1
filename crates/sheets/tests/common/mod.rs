use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

/// Bearer token handed out by the fake token endpoint.
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Spreadsheet id the fake values endpoint answers for.
pub const TEST_SPREADSHEET_ID: &str = "sheet-abc";

/// PEM private key matching `fixtures/service_account_pub.pem`.
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/service_account_key.pem");

/// Canned `values.get` bodies keyed by range name.
#[derive(Clone, Default)]
pub struct FakeSheets {
    ranges: Arc<HashMap<String, Value>>,
}

impl FakeSheets {
    pub fn new(ranges: Vec<(&str, Value)>) -> Self {
        Self {
            ranges: Arc::new(
                ranges
                    .into_iter()
                    .map(|(range, body)| (range.to_string(), body))
                    .collect(),
            ),
        }
    }
}

#[derive(Deserialize)]
struct TokenForm {
    grant_type: String,
    assertion: String,
}

async fn token(Form(form): Form<TokenForm>) -> (StatusCode, Json<Value>) {
    if form.grant_type != "urn:ietf:params:oauth:grant-type:jwt-bearer" || form.assertion.is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "access_token": TEST_ACCESS_TOKEN,
            "expires_in": 3599,
            "token_type": "Bearer",
        })),
    )
}

async fn values(
    State(fake): State<FakeSheets>,
    Path((spreadsheet_id, range)): Path<(String, String)>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {TEST_ACCESS_TOKEN}");
    if headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "code": 401, "status": "UNAUTHENTICATED" } })),
        );
    }
    if spreadsheet_id != TEST_SPREADSHEET_ID {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "code": 404, "status": "NOT_FOUND" } })),
        );
    }
    match fake.ranges.get(&range) {
        Some(body) => (StatusCode::OK, Json(body.clone())),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": 400, "message": format!("Unable to parse range: {range}") } })),
        ),
    }
}

/// Start the fake token + Sheets server on an ephemeral port.
pub async fn spawn_fake_google(fake: FakeSheets) -> SocketAddr {
    let app = Router::new()
        .route("/token", post(token))
        .route("/v4/spreadsheets/{spreadsheet_id}/values/{range}", get(values))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake server");
    });
    addr
}

/// Write a service-account key file pointing at the fake token endpoint.
pub fn write_credentials(dir: &std::path::Path, addr: SocketAddr) -> std::path::PathBuf {
    let path = dir.join("credentials.json");
    let key = json!({
        "type": "service_account",
        "project_id": "demo",
        "private_key_id": "kid-1",
        "private_key": TEST_PRIVATE_KEY,
        "client_email": "importer@demo.iam.gserviceaccount.com",
        "token_uri": format!("http://{addr}/token"),
    });
    std::fs::write(&path, key.to_string()).expect("write credentials");
    path
}
