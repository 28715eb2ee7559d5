use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// One parsed resume as stored by the service. The client displays these
/// fields as-is and never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub skills: Option<String>,
}

/// A document picked by the user, held in memory until it is uploaded.
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Reads a file from disk; the upload keeps only its final path component as name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_service_payload() {
        let json = r#"{
            "id": 7,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-123-4567",
            "education": "MIT",
            "work_experience": "Acme",
            "skills": "Rust"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.skills.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_record_tolerates_null_fields() {
        let json = r#"{"id": 1, "name": null, "email": null, "phone": null,
                       "education": null, "work_experience": null, "skills": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, None);
    }

    #[tokio::test]
    async fn test_selected_file_from_path_reads_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::write(&path, b"%PDF-1.4").await.unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.bytes, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_selected_file_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(dir.path().join("missing.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
    }
}
