use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub age: i32,
    pub gender: String,
    pub job_title: String,
    pub email: Option<String>,
    pub cv_path: String,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to insert a resume row; `id` and `created_at` are
/// assigned on insert.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub name: String,
    pub city: String,
    pub country: String,
    pub age: i32,
    pub gender: String,
    pub job_title: String,
    pub email: Option<String>,
    pub cv_path: String,
}
