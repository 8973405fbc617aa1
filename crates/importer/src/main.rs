//! `sheetplay-import` -- one-shot story content importer.
//!
//! Reads the characters, scenarios, choices and title sheets of a Google
//! Sheets spreadsheet and writes `characters.json`, `scenario.json` and
//! `title.json` for the game engine.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default                         | Description                     |
//! |---------------------------|----------|---------------------------------|---------------------------------|
//! | `SPREADSHEET_ID`          | yes      | --                              | Spreadsheet to import from      |
//! | `GOOGLE_CREDENTIALS_PATH` | no       | `credentials.json`              | Service-account JSON key        |
//! | `OUTPUT_DIR`              | no       | `../data`                       | Where the JSON files are written|
//! | `SHEETS_API_BASE_URL`     | no       | `https://sheets.googleapis.com` | Sheets API host                 |

use sheetplay_importer::pipeline;
use sheetplay_sheets::SheetsApi;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetplay_importer=info,sheetplay_sheets=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = pipeline::import(
        |name| std::env::var(name).ok(),
        |config| async move {
            SheetsApi::connect(
                &config.credentials_path,
                config.api_base_url,
                config.spreadsheet_id,
            )
            .await
        },
    )
    .await;

    if let Err(e) = result {
        tracing::error!(error = %e, "Import failed");
        std::process::exit(1);
    }
}
