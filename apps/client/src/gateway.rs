//! Backend gateway — the only place the client talks HTTP to the service.
//!
//! Calls are single-shot: no retries, no caching. Callers decide what a
//! failure means for the view.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ClientError;
use crate::models::{Record, SelectedFile};

const RESUMES_PATH: &str = "/resumes";
const UPLOAD_PATH: &str = "/upload";
/// Multipart field the service reads the document from.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /resumes — the full, ordered record list.
    pub async fn fetch_records(&self) -> Result<Vec<Record>, ClientError> {
        let response = self.client.get(self.endpoint(RESUMES_PATH)).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let records: Vec<Record> = serde_json::from_slice(&body)?;
        debug!("Decoded {} records", records.len());
        Ok(records)
    }

    /// POST /upload — sends `file` as the single multipart field and returns
    /// the service's JSON answer untouched.
    ///
    /// Any JSON body is returned, including the service's error payloads, so
    /// the user sees why a document was refused. Only transport failures and
    /// non-JSON bodies are errors.
    pub async fn upload_file(&self, file: &SelectedFile) -> Result<Value, ClientError> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!("Upload of {} answered with status {}", file.name, status);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
