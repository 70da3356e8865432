//! Corpus → vectorizer → classifier orchestration.

use std::path::Path;

use tracing::info;

use crate::classifier::corpus::{parse_corpus, read_corpus, CorpusRecord};
use crate::classifier::naive_bayes::{ClassModel, MultinomialNb};
use crate::classifier::vectorizer::{FeatureVector, TfidfVectorizer, Vocabulary};
use crate::classifier::{ClassifierError, JobClassifier};

/// Fitted vocabulary plus class statistics. Never mutated after construction,
/// so a single instance can serve any number of concurrent predictions.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    vocabulary: Vocabulary,
    classes: ClassModel,
}

impl TrainedModel {
    /// Fits the full pipeline on already-parsed records.
    pub fn fit(records: &[CorpusRecord]) -> Result<Self, ClassifierError> {
        let descriptions: Vec<&str> = records.iter().map(|r| r.description.as_str()).collect();
        let labels: Vec<String> = records.iter().map(|r| r.job_title.clone()).collect();

        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&descriptions)?;
        let vectors = descriptions
            .iter()
            .map(|d| vectorizer.transform(d))
            .collect::<Result<Vec<_>, _>>()?;
        let vocabulary = vectorizer.into_vocabulary()?;

        let mut classifier = MultinomialNb::new();
        classifier.fit(&vectors, &labels, vocabulary.len())?;
        let classes = classifier.into_model()?;

        info!(
            "Job classifier fitted: {} records, {} features, {} classes",
            records.len(),
            vocabulary.len(),
            classes.labels().len()
        );

        Ok(Self {
            vocabulary,
            classes,
        })
    }

    /// Parses corpus text and fits on it.
    pub fn from_source(source: &str) -> Result<Self, ClassifierError> {
        Self::fit(&parse_corpus(source)?)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn transform(&self, raw_text: &str) -> FeatureVector {
        self.vocabulary.transform(raw_text)
    }

    pub fn predict(&self, raw_text: &str) -> &str {
        self.classes.predict(&self.transform(raw_text))
    }
}

impl JobClassifier for TrainedModel {
    fn predict(&self, text: &str) -> String {
        TrainedModel::predict(self, text).to_string()
    }

    fn labels(&self) -> &[String] {
        self.classes.labels()
    }
}

/// Reads the corpus at `path` and fits the model. Called once at startup;
/// any error here aborts the process.
pub fn load_and_fit(path: &Path) -> Result<TrainedModel, ClassifierError> {
    info!("Loading job description corpus from {}", path.display());
    let records = read_corpus(path)?;
    TrainedModel::fit(&records)
}
