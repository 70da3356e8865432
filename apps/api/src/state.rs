use std::sync::Arc;

use sqlx::PgPool;

use crate::classifier::JobClassifier;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Job-field classifier, fitted once at startup. Read-only from here on.
    pub classifier: Arc<dyn JobClassifier>,
}
