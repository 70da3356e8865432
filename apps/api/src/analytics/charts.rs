//! Shapes grouped counts into chart-ready series. Rendering is the client's job.

use serde::Serialize;

use crate::analytics::queries::{CountryGenderCount, JobTitleCount, JobTitleGenderSplit};

/// One bar/line series: `x[i]` pairs with `y[i]`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub series: Vec<Series>,
}

/// Groups country rows into one series per gender, in order of first
/// appearance. Row order (count descending) is kept within each series.
pub fn country_chart(rows: &[CountryGenderCount]) -> Chart {
    let mut series: Vec<Series> = Vec::new();
    for row in rows {
        let idx = match series.iter().position(|s| s.name == row.gender) {
            Some(idx) => idx,
            None => {
                series.push(Series {
                    name: row.gender.clone(),
                    x: Vec::new(),
                    y: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[idx].x.push(row.country.clone());
        series[idx].y.push(row.count);
    }

    Chart {
        title: "Top 10 Countries by Resume Count",
        x_axis: "Country",
        y_axis: "Count",
        series,
    }
}

pub fn job_title_split_chart(rows: &[JobTitleGenderSplit]) -> Chart {
    let x: Vec<String> = rows.iter().map(|r| r.job_title.clone()).collect();
    Chart {
        title: "Top 10 Job Titles by Gender",
        x_axis: "Job Title",
        y_axis: "Count",
        series: vec![
            Series {
                name: "Male".to_string(),
                x: x.clone(),
                y: rows.iter().map(|r| r.male_count).collect(),
            },
            Series {
                name: "Female".to_string(),
                x,
                y: rows.iter().map(|r| r.female_count).collect(),
            },
        ],
    }
}

pub fn job_title_chart(gender: &str, rows: &[JobTitleCount]) -> Chart {
    Chart {
        title: "Top 10 Job Titles by Gender",
        x_axis: "Job Title",
        y_axis: "Count",
        series: vec![Series {
            name: gender.to_string(),
            x: rows.iter().map(|r| r.job_title.clone()).collect(),
            y: rows.iter().map(|r| r.count).collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, gender: &str, count: i64) -> CountryGenderCount {
        CountryGenderCount {
            country: country.into(),
            gender: gender.into(),
            count,
        }
    }

    #[test]
    fn test_country_chart_splits_by_gender() {
        let chart = country_chart(&[
            row("India", "Male", 9),
            row("India", "Female", 7),
            row("Brazil", "Male", 4),
            row("Chile", "Female", 2),
        ]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Male");
        assert_eq!(chart.series[0].x, vec!["India", "Brazil"]);
        assert_eq!(chart.series[0].y, vec![9, 4]);
        assert_eq!(chart.series[1].name, "Female");
        assert_eq!(chart.series[1].x, vec!["India", "Chile"]);
    }

    #[test]
    fn test_country_chart_empty() {
        assert!(country_chart(&[]).series.is_empty());
    }

    #[test]
    fn test_split_chart_has_parallel_series() {
        let chart = job_title_split_chart(&[
            JobTitleGenderSplit {
                job_title: "Nurse".into(),
                male_count: 1,
                female_count: 5,
            },
            JobTitleGenderSplit {
                job_title: "Engineer".into(),
                male_count: 4,
                female_count: 2,
            },
        ]);
        assert_eq!(chart.series[0].x, chart.series[1].x);
        assert_eq!(chart.series[0].y, vec![1, 4]);
        assert_eq!(chart.series[1].y, vec![5, 2]);
    }

    #[test]
    fn test_single_gender_chart_is_named_after_gender() {
        let chart = job_title_chart(
            "Female",
            &[JobTitleCount {
                job_title: "Teacher".into(),
                count: 3,
            }],
        );
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Female");
        assert_eq!(chart.series[0].y, vec![3]);
    }
}
