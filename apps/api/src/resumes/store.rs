use sqlx::SqlitePool;
use tracing::info;

use crate::models::resume::{ParsedResume, ResumeRow};

/// Inserts the persisted subset of a parsed resume and returns its new id.
pub async fn insert_resume(pool: &SqlitePool, parsed: &ParsedResume) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO resumes (name, email, phone, education, work_experience, skills)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&parsed.name)
    .bind(&parsed.email)
    .bind(&parsed.phone)
    .bind(&parsed.education)
    .bind(&parsed.work_experience)
    .bind(&parsed.skills)
    .execute(pool)
    .await?
    .last_insert_rowid();

    info!("Stored resume {id} for '{}'", parsed.name);
    Ok(id)
}

/// Returns every stored resume in insertion order.
pub async fn list_resumes(pool: &SqlitePool) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT id, name, email, phone, education, work_experience, skills FROM resumes ORDER BY id",
    )
    .fetch_all(pool)
    .await
}
