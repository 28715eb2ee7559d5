use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored resume, exactly as served by `GET /resumes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub skills: Option<String>,
}

/// Structured fields extracted from a resume's text.
/// `leadership_experience` is reported back to the uploader but not persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub work_experience: String,
    pub leadership_experience: String,
    pub skills: String,
}
