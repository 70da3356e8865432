//! Job-field classifier — TF-IDF features feeding a multinomial naive Bayes model.
//!
//! The model is fitted exactly once at startup from the job description corpus
//! and is immutable afterwards. `AppState` carries it as `Arc<dyn JobClassifier>`
//! so handlers can share it across requests without locking.

use std::path::PathBuf;

use thiserror::Error;

pub mod corpus;
pub mod naive_bayes;
pub mod pipeline;
pub mod tokenizer;
pub mod vectorizer;

pub use pipeline::{load_and_fit, TrainedModel};

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Corpus line {line} is malformed: {reason}")]
    CorpusFormat { line: usize, reason: String },

    #[error("Failed to read corpus from {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty vocabulary: no usable tokens remain after stopword removal")]
    EmptyVocabulary,

    #[error("Empty training set: {features} feature vectors for {labels} labels")]
    EmptyTrainingSet { features: usize, labels: usize },

    #[error("Model used before fit")]
    NotFitted,
}

/// Anything that can map free-form document text to a job-title label.
///
/// Implementations must be pure with respect to their inputs: the same text
/// always yields the same label, and prediction never fails.
pub trait JobClassifier: Send + Sync {
    fn predict(&self, text: &str) -> String;

    /// Distinct labels the classifier can return, in its tie-break order.
    fn labels(&self) -> &[String];
}
