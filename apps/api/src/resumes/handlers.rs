use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ParsedResume, ResumeRow};
use crate::resumes::extract::extract_pdf_text;
use crate::resumes::parser::parse_resume;
use crate::resumes::store::{insert_resume, list_resumes};
use crate::state::AppState;

pub const UPLOAD_FIELD: &str = "file";
/// Scanned resumes routinely exceed axum's 2 MiB default.
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub extracted_data: ParsedResume,
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = list_resumes(&state.db).await?;
    Ok(Json(rows))
}

/// POST /upload
///
/// Saves the document under the upload directory, extracts its text, parses
/// it and stores the result. Only the first `file` field is used.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if upload.is_some() || field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((file_name, data));
    }

    let (raw_name, data) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let file_name = stored_file_name(&raw_name)
        .ok_or_else(|| AppError::Validation("No file selected".to_string()))?;

    tokio::fs::create_dir_all(&state.upload_dir).await?;
    let path = state.upload_dir.join(&file_name);
    tokio::fs::write(&path, &data).await?;
    info!("Saved upload {} ({} bytes)", path.display(), data.len());

    let text = extract_pdf_text(&file_name, data).await?;
    let extracted_data = parse_resume(&text);
    insert_resume(&state.db, &extracted_data).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded and processed successfully",
        extracted_data,
    }))
}

/// Keeps only the final path component so a crafted filename cannot escape
/// the upload directory.
fn stored_file_name(raw: &str) -> Option<String> {
    Path::new(raw)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
