use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::events::storage::replace_all;
use crate::fixtures::pipeline::{decode, scan, ImportOutcome};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub inserted: u64,
}

/// POST /api/v1/fixtures/import
///
/// Multipart upload of the fixtures spreadsheet export. The file is read in
/// full before any processing starts; rows are interpreted against the
/// calendar year current at upload time. A rejected file leaves the events
/// collection untouched.
pub async fn handle_import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("fixtures.csv").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
            break;
        }
    }
    let (filename, data) =
        upload.ok_or_else(|| AppError::Upload("No file field in upload".to_string()))?;

    let records = decode(&data).map_err(|e| AppError::Upload(format!("Unreadable CSV: {e}")))?;
    let year = Utc::now().year();

    match scan(&records, year)? {
        ImportOutcome::Rejected(report) => {
            info!(
                "Rejected fixtures upload {filename}: {} row(s) failed validation",
                report.len()
            );
            Err(AppError::ImportRejected(report))
        }
        ImportOutcome::Built(events) => {
            let inserted = replace_all(&state.db, &events).await?;
            info!("Imported {inserted} fixture(s) from {filename}");
            Ok(Json(ImportResponse { inserted }))
        }
    }
}
