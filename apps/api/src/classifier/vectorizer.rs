//! TF-IDF feature extraction over a vocabulary learned from the training corpus.

use std::collections::{BTreeMap, BTreeSet};

use crate::classifier::tokenizer::tokenize;
use crate::classifier::ClassifierError;

/// Sparse document vector: `(feature index, weight)` pairs sorted by index,
/// zero weights omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }
}

/// Token → feature index and IDF weight. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl Vocabulary {
    /// Learns the vocabulary and IDF weights from `documents`.
    ///
    /// Indices follow lexicographic token order, so two fits over the same
    /// corpus always produce the same feature layout.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, ClassifierError> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let distinct: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for token in distinct {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut index = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (i, (token, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            index.insert(token, i);
        }

        Ok(Self { index, idf })
    }

    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn idf(&self, index: usize) -> Option<f64> {
        self.idf.get(index).copied()
    }

    /// Maps `document` to an L2-normalized TF-IDF vector.
    ///
    /// Out-of-vocabulary tokens are dropped. A document with no known tokens
    /// yields the empty vector rather than dividing by a zero norm.
    pub fn transform(&self, document: &str) -> FeatureVector {
        let mut term_frequency: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document) {
            if let Some(i) = self.index_of(&token) {
                *term_frequency.entry(i).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = term_frequency
            .into_iter()
            .map(|(i, tf)| (i, tf * self.idf[i]))
            .collect();

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return FeatureVector::default();
        }
        for (_, w) in &mut entries {
            *w /= norm;
        }

        FeatureVector { entries }
    }
}

/// Estimator wrapper around [`Vocabulary`] that can exist before it is fitted.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: Option<Vocabulary>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<&Vocabulary, ClassifierError> {
        let vocabulary = Vocabulary::fit(documents)?;
        Ok(self.vocabulary.insert(vocabulary))
    }

    pub fn transform(&self, document: &str) -> Result<FeatureVector, ClassifierError> {
        self.vocabulary
            .as_ref()
            .map(|v| v.transform(document))
            .ok_or(ClassifierError::NotFitted)
    }

    pub fn into_vocabulary(self) -> Result<Vocabulary, ClassifierError> {
        self.vocabulary.ok_or(ClassifierError::NotFitted)
    }
}
