use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub corpus_path: PathBuf,
    pub upload_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub results_per_page: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            corpus_path: env_or("CORPUS_PATH", "job_descriptions.txt").into(),
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
            results_per_page: parse_per_page(&env_or("RESULTS_PER_PAGE", "10"))?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_per_page(raw: &str) -> Result<i64> {
    let value = raw
        .parse::<i64>()
        .context("RESULTS_PER_PAGE must be an integer")?;
    anyhow::ensure!(value > 0, "RESULTS_PER_PAGE must be at least 1, got {value}");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_per_page_accepts_positive() {
        assert_eq!(parse_per_page("25").unwrap(), 25);
    }

    #[test]
    fn test_parse_per_page_rejects_zero_and_garbage() {
        assert!(parse_per_page("0").is_err());
        assert!(parse_per_page("-3").is_err());
        assert!(parse_per_page("ten").is_err());
    }
}
