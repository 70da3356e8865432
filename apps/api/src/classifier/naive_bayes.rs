//! Multinomial naive Bayes over TF-IDF weighted features.
//!
//! Classes are kept in lexicographic label order. Prediction scans that order
//! and only replaces the current best on a strictly greater score, so ties go
//! to the lexicographically first label.

use std::collections::BTreeMap;

use crate::classifier::vectorizer::FeatureVector;
use crate::classifier::ClassifierError;

/// Laplace smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Per-class statistics produced by a successful fit.
#[derive(Debug, Clone)]
pub struct ClassModel {
    labels: Vec<String>,
    log_priors: Vec<f64>,
    /// `feature_log_prob[class][feature]`, dense over the vocabulary.
    feature_log_prob: Vec<Vec<f64>>,
}

impl ClassModel {
    /// Fits class priors and smoothed feature log-likelihoods.
    ///
    /// `n_features` is the vocabulary size; every feature index in `vectors`
    /// must be below it.
    pub fn fit(
        vectors: &[FeatureVector],
        labels: &[String],
        n_features: usize,
        alpha: f64,
    ) -> Result<Self, ClassifierError> {
        if vectors.is_empty() || vectors.len() != labels.len() {
            return Err(ClassifierError::EmptyTrainingSet {
                features: vectors.len(),
                labels: labels.len(),
            });
        }

        // label -> (document count, summed feature weights)
        let mut per_class: BTreeMap<&str, (usize, Vec<f64>)> = BTreeMap::new();
        for (vector, label) in vectors.iter().zip(labels) {
            let (count, weights) = per_class
                .entry(label.as_str())
                .or_insert_with(|| (0, vec![0.0; n_features]));
            *count += 1;
            for &(i, w) in vector.entries() {
                if let Some(slot) = weights.get_mut(i) {
                    *slot += w;
                }
            }
        }

        let total = vectors.len() as f64;
        let mut model = Self {
            labels: Vec::with_capacity(per_class.len()),
            log_priors: Vec::with_capacity(per_class.len()),
            feature_log_prob: Vec::with_capacity(per_class.len()),
        };

        for (label, (count, weights)) in per_class {
            let denominator = weights.iter().sum::<f64>() + alpha * n_features as f64;
            let log_probs: Vec<f64> = if denominator > 0.0 {
                weights.iter().map(|w| ((w + alpha) / denominator).ln()).collect()
            } else {
                // alpha == 0 and the class saw no features: contributes nothing.
                vec![0.0; n_features]
            };

            model.labels.push(label.to_string());
            model.log_priors.push((count as f64 / total).ln());
            model.feature_log_prob.push(log_probs);
        }

        Ok(model)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Joint log-score of `vector` under each class, in label order.
    pub fn scores(&self, vector: &FeatureVector) -> Vec<f64> {
        self.log_priors
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + vector
                        .entries()
                        .iter()
                        .filter_map(|&(i, w)| log_probs.get(i).map(|lp| w * lp))
                        .sum::<f64>()
            })
            .collect()
    }

    /// Label with the highest score; an empty vector falls back to priors.
    pub fn predict(&self, vector: &FeatureVector) -> &str {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, score) in self.scores(vector).into_iter().enumerate() {
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        &self.labels[best]
    }
}

/// Estimator wrapper around [`ClassModel`] that can exist before it is fitted.
#[derive(Debug)]
pub struct MultinomialNb {
    alpha: f64,
    model: Option<ClassModel>,
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::with_alpha(DEFAULT_ALPHA)
    }
}

impl MultinomialNb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alpha(alpha: f64) -> Self {
        Self { alpha, model: None }
    }

    pub fn fit(
        &mut self,
        vectors: &[FeatureVector],
        labels: &[String],
        n_features: usize,
    ) -> Result<&ClassModel, ClassifierError> {
        let model = ClassModel::fit(vectors, labels, n_features, self.alpha)?;
        Ok(self.model.insert(model))
    }

    pub fn predict(&self, vector: &FeatureVector) -> Result<&str, ClassifierError> {
        self.model
            .as_ref()
            .map(|m| m.predict(vector))
            .ok_or(ClassifierError::NotFitted)
    }

    pub fn into_model(self) -> Result<ClassModel, ClassifierError> {
        self.model.ok_or(ClassifierError::NotFitted)
    }
}
