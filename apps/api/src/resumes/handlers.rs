use std::path::{Path, PathBuf};

use axum::{
    extract::{multipart::Field, Multipart, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classifier::JobClassifier;
use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRow};
use crate::resumes::extraction::{extract_email, extract_pdf_text, is_pdf_filename, sanitize_filename};
use crate::resumes::storage::{
    count_resumes, filter_options, insert_resume, list_resumes, page_offset, total_pages,
    FilterOptions,
};
use crate::state::AppState;

/// Raw multipart fields as received; any of them may be missing.
#[derive(Debug, Default)]
struct UploadForm {
    file_name: Option<String>,
    file: Option<Bytes>,
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
    age: Option<String>,
    gender: Option<String>,
}

/// A complete, validated upload ready to be stored and classified.
#[derive(Debug)]
struct ResumeUpload {
    file_name: String,
    file: Bytes,
    name: String,
    city: String,
    country: String,
    age: i32,
    gender: String,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            let key = field.name().unwrap_or_default().to_string();
            match key.as_str() {
                "file" => {
                    form.file_name = field.file_name().map(str::to_string);
                    form.file = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?,
                    );
                }
                "name" => form.name = Some(text(field).await?),
                "city" => form.city = Some(text(field).await?),
                "country" => form.country = Some(text(field).await?),
                "age" => form.age = Some(text(field).await?),
                "gender" => form.gender = Some(text(field).await?),
                _ => {}
            }
        }
        Ok(form)
    }

    fn validate(self) -> Result<ResumeUpload, AppError> {
        let file_name = self
            .file_name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("Missing field 'file'".into()))?;
        if !is_pdf_filename(&file_name) {
            return Err(AppError::Validation(
                "Invalid file format. Please upload a PDF file.".into(),
            ));
        }
        let file = self
            .file
            .ok_or_else(|| AppError::Validation("Missing field 'file'".into()))?;

        let age_raw = required("age", self.age)?;
        let age = age_raw
            .parse::<i32>()
            .ok()
            .filter(|age| *age >= 0)
            .ok_or_else(|| {
                AppError::Validation(format!("Field 'age' must be a non-negative integer, got {age_raw:?}"))
            })?;

        Ok(ResumeUpload {
            file_name,
            file,
            name: required("name", self.name)?,
            city: required("city", self.city)?,
            country: required("country", self.country)?,
            age,
            gender: required("gender", self.gender)?,
        })
    }
}

async fn text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

fn required(key: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing field '{key}'")))
}

async fn save_upload(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{}_{}", Uuid::new_v4(), sanitize_filename(file_name)));
    tokio::fs::write(&path, contents).await?;
    Ok(path)
}

/// Removes a saved upload whose request failed after it was written.
async fn discard_upload(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove rejected upload {}: {e}", path.display());
    }
}

/// Extracts text from the saved upload, classifies it and builds the row.
async fn prepare_resume(
    upload: ResumeUpload,
    path: &Path,
    classifier: &dyn JobClassifier,
) -> Result<NewResume, AppError> {
    let text = extract_pdf_text(upload.file).await?;

    Ok(NewResume {
        name: upload.name,
        city: upload.city,
        country: upload.country,
        age: upload.age,
        gender: upload.gender,
        job_title: classifier.predict(&text),
        email: extract_email(&text),
        cv_path: path.to_string_lossy().into_owned(),
    })
}

/// POST /api/v1/resumes
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let upload = UploadForm::read(multipart).await?.validate()?;

    let path = save_upload(&state.config.upload_dir, &upload.file_name, &upload.file).await?;
    let stored: Result<ResumeRow, AppError> = async {
        let resume = prepare_resume(upload, &path, state.classifier.as_ref()).await?;
        Ok(insert_resume(&state.db, &resume).await?)
    }
    .await;

    match stored {
        Ok(row) => {
            info!("Stored resume {} classified as {:?}", row.id, row.job_title);
            Ok((StatusCode::CREATED, Json(row)))
        }
        Err(e) => {
            discard_upload(&path).await;
            Err(e)
        }
    }
}

/// `?page=` is advisory: anything that is not an integer means page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeRow>,
    pub page: i64,
    pub per_page: i64,
    pub total_records: i64,
    pub total_pages: i64,
}

/// GET /api/v1/resumes?page=N
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let page = params.page();
    let per_page = state.config.results_per_page;

    let total_records = count_resumes(&state.db).await?;
    let resumes = list_resumes(&state.db, per_page, page_offset(page, per_page)).await?;

    Ok(Json(ResumeListResponse {
        resumes,
        page,
        per_page,
        total_records,
        total_pages: total_pages(total_records, per_page),
    }))
}

/// GET /api/v1/filters
pub async fn handle_filters(State(state): State<AppState>) -> Result<Json<FilterOptions>, AppError> {
    Ok(Json(filter_options(&state.db).await?))
}
