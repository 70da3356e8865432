use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::{NewResume, ResumeRow};

/// Distinct values available for the analytics filter dropdowns.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FilterOptions {
    pub job_titles: Vec<String>,
    pub countries: Vec<String>,
    pub genders: Vec<String>,
}

pub async fn insert_resume(pool: &PgPool, resume: &NewResume) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, name, city, country, age, gender, job_title, email, cv_path)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&resume.name)
    .bind(&resume.city)
    .bind(&resume.country)
    .bind(resume.age)
    .bind(&resume.gender)
    .bind(&resume.job_title)
    .bind(&resume.email)
    .bind(&resume.cv_path)
    .fetch_one(pool)
    .await
}

pub async fn count_resumes(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
        .fetch_one(pool)
        .await
}

pub async fn list_resumes(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes ORDER BY created_at, id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn filter_options(pool: &PgPool) -> Result<FilterOptions, sqlx::Error> {
    let job_titles =
        sqlx::query_scalar("SELECT DISTINCT job_title FROM resumes ORDER BY job_title")
            .fetch_all(pool)
            .await?;
    let countries = sqlx::query_scalar("SELECT DISTINCT country FROM resumes ORDER BY country")
        .fetch_all(pool)
        .await?;
    let genders = sqlx::query_scalar("SELECT DISTINCT gender FROM resumes ORDER BY gender")
        .fetch_all(pool)
        .await?;

    Ok(FilterOptions {
        job_titles,
        countries,
        genders,
    })
}

/// Number of pages needed for `total` records, never less than zero.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 || total <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

/// Row offset of a 1-based page number; pages below 1 are treated as 1.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(per_page)
}
