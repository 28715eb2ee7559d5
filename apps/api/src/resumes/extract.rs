use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

/// Extracts the plain text of a PDF document.
///
/// Runs on the blocking pool: `pdf-extract` is CPU-bound and may panic on
/// malformed input, which surfaces here as a join error.
pub async fn extract_pdf_text(file_name: &str, data: Bytes) -> Result<String, AppError> {
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            warn!("PDF extraction for {file_name} aborted: {e}");
            unreadable(file_name)
        })?;

    result.map_err(|e| {
        warn!("PDF extraction for {file_name} failed: {e}");
        unreadable(file_name)
    })
}

fn unreadable(file_name: &str) -> AppError {
    AppError::UnprocessableEntity(format!("Could not extract text from '{file_name}'"))
}
