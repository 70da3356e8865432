use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::analytics::charts::{country_chart, job_title_chart, job_title_split_chart, Chart};
use crate::analytics::queries::{
    country_gender_counts, job_title_counts_for_gender, job_title_gender_split, resume_counts,
    AnalyticsFilters, CountryGenderCount, JobTitleCount, JobTitleGenderSplit, ResumeCounts,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CountryBreakdown {
    pub rows: Vec<CountryGenderCount>,
    pub chart: Chart,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum JobTitleRows {
    ByGender(Vec<JobTitleGenderSplit>),
    SingleGender(Vec<JobTitleCount>),
}

#[derive(Serialize)]
pub struct JobTitleBreakdown {
    pub rows: JobTitleRows,
    pub chart: Chart,
}

/// GET /api/v1/analytics/by-country
pub async fn handle_by_country(
    State(state): State<AppState>,
    Query(filters): Query<AnalyticsFilters>,
) -> Result<Json<CountryBreakdown>, AppError> {
    let filters = filters.normalized();
    let rows = country_gender_counts(&state.db, &filters).await?;
    let chart = country_chart(&rows);
    Ok(Json(CountryBreakdown { rows, chart }))
}

/// GET /api/v1/analytics/by-job-title
///
/// Only the gender filter applies here.
pub async fn handle_by_job_title(
    State(state): State<AppState>,
    Query(filters): Query<AnalyticsFilters>,
) -> Result<Json<JobTitleBreakdown>, AppError> {
    let breakdown = match filters.normalized().gender {
        None => {
            let rows = job_title_gender_split(&state.db).await?;
            JobTitleBreakdown {
                chart: job_title_split_chart(&rows),
                rows: JobTitleRows::ByGender(rows),
            }
        }
        Some(gender) => {
            let rows = job_title_counts_for_gender(&state.db, &gender).await?;
            JobTitleBreakdown {
                chart: job_title_chart(&gender, &rows),
                rows: JobTitleRows::SingleGender(rows),
            }
        }
    };
    Ok(Json(breakdown))
}

/// GET /api/v1/analytics/counts
pub async fn handle_counts(
    State(state): State<AppState>,
    Query(filters): Query<AnalyticsFilters>,
) -> Result<Json<ResumeCounts>, AppError> {
    Ok(Json(resume_counts(&state.db, &filters.normalized()).await?))
}
