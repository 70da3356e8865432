//! Grouped counts over the `resumes` table.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// How many groups the chart endpoints return.
pub const TOP_N: i64 = 10;

/// Optional equality filters shared by the analytics endpoints.
/// Empty strings coming from blank form selects count as absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnalyticsFilters {
    pub gender: Option<String>,
    pub job_title: Option<String>,
    pub country: Option<String>,
}

impl AnalyticsFilters {
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            gender: keep(self.gender),
            job_title: keep(self.job_title),
            country: keep(self.country),
        }
    }

    /// Appends ` AND column = $n` for each present filter.
    fn push_where<'a>(&'a self, qb: &mut QueryBuilder<'a, Postgres>) {
        for (column, value) in [
            ("gender", &self.gender),
            ("job_title", &self.job_title),
            ("country", &self.country),
        ] {
            if let Some(value) = value {
                qb.push(" AND ").push(column).push(" = ").push_bind(value.as_str());
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct CountryGenderCount {
    pub country: String,
    pub gender: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct JobTitleGenderSplit {
    pub job_title: String,
    pub male_count: i64,
    pub female_count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct JobTitleCount {
    pub job_title: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeCounts {
    pub total_resumes: i64,
    pub total_males: i64,
    pub total_females: i64,
}

pub(crate) fn country_gender_query(filters: &AnalyticsFilters) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT country, gender, COUNT(*) AS count FROM resumes WHERE 1=1",
    );
    filters.push_where(&mut qb);
    qb.push(" GROUP BY country, gender ORDER BY count DESC, country, gender LIMIT ")
        .push_bind(TOP_N);
    qb
}

pub(crate) fn filtered_count_query(filters: &AnalyticsFilters) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM resumes WHERE 1=1");
    filters.push_where(&mut qb);
    qb
}

pub async fn country_gender_counts(
    pool: &PgPool,
    filters: &AnalyticsFilters,
) -> Result<Vec<CountryGenderCount>, sqlx::Error> {
    let mut qb = country_gender_query(filters);
    let rows = qb
        .build_query_as::<CountryGenderCount>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Top job titles with a male/female split across all records.
pub async fn job_title_gender_split(
    pool: &PgPool,
) -> Result<Vec<JobTitleGenderSplit>, sqlx::Error> {
    sqlx::query_as::<_, JobTitleGenderSplit>(
        r#"
        SELECT job_title,
               COUNT(*) FILTER (WHERE gender = 'Male')   AS male_count,
               COUNT(*) FILTER (WHERE gender = 'Female') AS female_count
        FROM resumes
        GROUP BY job_title
        ORDER BY COUNT(*) DESC, job_title
        LIMIT $1
        "#,
    )
    .bind(TOP_N)
    .fetch_all(pool)
    .await
}

/// Top job titles among records of a single gender.
pub async fn job_title_counts_for_gender(
    pool: &PgPool,
    gender: &str,
) -> Result<Vec<JobTitleCount>, sqlx::Error> {
    sqlx::query_as::<_, JobTitleCount>(
        r#"
        SELECT job_title, COUNT(*) AS count
        FROM resumes
        WHERE gender = $1
        GROUP BY job_title
        ORDER BY count DESC, job_title
        LIMIT $2
        "#,
    )
    .bind(gender)
    .bind(TOP_N)
    .fetch_all(pool)
    .await
}

async fn count_gender(pool: &PgPool, gender: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM resumes WHERE gender = $1")
        .bind(gender)
        .fetch_one(pool)
        .await
}

/// Filtered total plus gender totals. With a gender filter both gender
/// totals report that gender's count.
pub async fn resume_counts(
    pool: &PgPool,
    filters: &AnalyticsFilters,
) -> Result<ResumeCounts, sqlx::Error> {
    let mut qb = filtered_count_query(filters);
    let total_resumes = qb.build_query_scalar::<i64>().fetch_one(pool).await?;

    let (total_males, total_females) = match &filters.gender {
        Some(gender) => {
            let n = count_gender(pool, gender).await?;
            (n, n)
        }
        None => (
            count_gender(pool, "Male").await?,
            count_gender(pool, "Female").await?,
        ),
    };

    Ok(ResumeCounts {
        total_resumes,
        total_males,
        total_females,
    })
}
