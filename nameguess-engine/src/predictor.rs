//! Secondary name predictor
//!
//! An independent signal for the hybrid ranker: a linear model over one-hot
//! answer features with a softmax over a small fixed vocabulary. It never sees
//! the name database. The ranker treats any failure here as "no predictions".
//!
//! # Model file format
//! ```json
//! {
//!   "vocabulary": ["Emma", "Liam"],
//!   "bias": [0.0, 0.0],
//!   "weights": { "gender=female": [2.0, 0.0], "length=short": [1.0, 1.0] }
//! }
//! ```
//! Every weight row must have one entry per vocabulary name.

use crate::error::PredictorError;
use crate::record::GenderCode;
use nameguess_common::tags::{LengthBucket, StartClass};
use nameguess_common::AnswerSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// One predicted name with its probability in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub name: String,
    pub probability: f64,
}

impl Prediction {
    /// Probability on the 0-100 scale the ranker blends with rule scores
    pub fn score(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Maps an answer set to a probability distribution over names
pub trait NamePredictor: Send + Sync {
    /// Predictions ordered by probability, highest first
    fn predict(&self, answers: &AnswerSet) -> Result<Vec<Prediction>, PredictorError>;
}

/// Serialized linear model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub vocabulary: Vec<String>,
    #[serde(default)]
    pub bias: Vec<f64>,
    #[serde(default)]
    pub weights: HashMap<String, Vec<f64>>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), PredictorError> {
        if self.vocabulary.is_empty() {
            return Err(PredictorError::EmptyVocabulary);
        }
        let n = self.vocabulary.len();
        if !self.bias.is_empty() && self.bias.len() != n {
            return Err(PredictorError::InvalidModel(format!(
                "bias has {} entries for a vocabulary of {}",
                self.bias.len(),
                n
            )));
        }
        for (feature, row) in &self.weights {
            if row.len() != n {
                return Err(PredictorError::InvalidModel(format!(
                    "weights for '{}' have {} entries for a vocabulary of {}",
                    feature,
                    row.len(),
                    n
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(PredictorError::InvalidModel(format!(
                    "weights for '{}' are not finite",
                    feature
                )));
            }
        }
        Ok(())
    }
}

/// Active features of an answer set, as `question=value` keys
pub fn answer_features(answers: &AnswerSet) -> Vec<String> {
    let mut features = Vec::new();
    if let Some(gender) = answers.gender {
        features.push(format!("gender={}", gender));
    }
    if let Some(length) = answers.length {
        features.push(format!("length={}", length));
    }
    if let Some(start) = answers.starts_with {
        features.push(format!("starts_with={}", start));
    }
    if let Some(popularity) = answers.popularity {
        features.push(format!("popularity={}", popularity));
    }
    if let Some(decade) = answers.decade {
        features.push(format!("decade={}", decade));
    }
    if let Some(letter) = answers.favorite_letter {
        features.push(format!("letter={}", letter.to_ascii_lowercase()));
    }
    if let Some(language) = answers.language_preference {
        features.push(format!("language={}", language));
    }
    if let Some(religion) = answers.religious_tradition {
        features.push(format!("religion={}", religion));
    }
    if let Some(values) = answers.political_values {
        features.push(format!("political={}", values));
    }
    if let Some(location) = answers.grew_up_location {
        features.push(format!("location={}", location));
    }
    features
}

/// Linear softmax predictor over a fixed vocabulary
#[derive(Debug, Clone)]
pub struct LinearNamePredictor {
    model: LinearModel,
}

impl LinearNamePredictor {
    pub fn new(model: LinearModel) -> Result<Self, PredictorError> {
        model.validate()?;
        Ok(Self { model })
    }

    pub fn from_json_str(json: &str) -> Result<Self, PredictorError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, PredictorError> {
        let contents = std::fs::read_to_string(path)?;
        let predictor = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            vocabulary = predictor.model.vocabulary.len(),
            "Loaded predictor model"
        );
        Ok(predictor)
    }

    /// Small built-in model keyed on gender, length, start and favourite letter
    pub fn builtin() -> Self {
        let vocabulary: Vec<String> = BUILTIN_VOCABULARY
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        let n = vocabulary.len();
        let mut weights: HashMap<String, Vec<f64>> = HashMap::new();

        for (i, (name, gender)) in BUILTIN_VOCABULARY.iter().enumerate() {
            let genders: &[&str] = match gender {
                GenderCode::M => &["male"],
                GenderCode::F => &["female"],
                GenderCode::NB => &["nonbinary", "prefer_not_to_say"],
            };
            for g in genders {
                weights.entry(format!("gender={}", g)).or_insert_with(|| vec![0.0; n])[i] +=
                    BUILTIN_GENDER_WEIGHT;
            }

            let length = LengthBucket::of_len(name.chars().count());
            weights.entry(format!("length={}", length)).or_insert_with(|| vec![0.0; n])[i] +=
                BUILTIN_LENGTH_WEIGHT;

            if let Some(start) = StartClass::of_name(name) {
                weights.entry(format!("starts_with={}", start)).or_insert_with(|| vec![0.0; n])
                    [i] += BUILTIN_START_WEIGHT;
            }

            if let Some(first) = name.chars().next() {
                weights
                    .entry(format!("letter={}", first.to_ascii_lowercase()))
                    .or_insert_with(|| vec![0.0; n])[i] += BUILTIN_LETTER_WEIGHT;
            }
        }

        Self {
            model: LinearModel {
                vocabulary,
                bias: vec![0.0; n],
                weights,
            },
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.model.vocabulary
    }
}

impl NamePredictor for LinearNamePredictor {
    fn predict(&self, answers: &AnswerSet) -> Result<Vec<Prediction>, PredictorError> {
        let n = self.model.vocabulary.len();
        let mut logits = if self.model.bias.is_empty() {
            vec![0.0; n]
        } else {
            self.model.bias.clone()
        };

        for feature in answer_features(answers) {
            if let Some(row) = self.model.weights.get(&feature) {
                for (logit, weight) in logits.iter_mut().zip(row) {
                    *logit += weight;
                }
            }
        }

        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(PredictorError::InvalidModel(
                "softmax normaliser is not finite".to_string(),
            ));
        }

        let mut predictions: Vec<Prediction> = self
            .model
            .vocabulary
            .iter()
            .zip(exps)
            .map(|(name, e)| Prediction {
                name: name.clone(),
                probability: e / sum,
            })
            .collect();
        predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        Ok(predictions)
    }
}

const BUILTIN_GENDER_WEIGHT: f64 = 2.0;
const BUILTIN_LENGTH_WEIGHT: f64 = 1.0;
const BUILTIN_START_WEIGHT: f64 = 0.5;
const BUILTIN_LETTER_WEIGHT: f64 = 1.5;

const BUILTIN_VOCABULARY: &[(&str, GenderCode)] = &[
    ("James", GenderCode::M),
    ("Michael", GenderCode::M),
    ("David", GenderCode::M),
    ("Christopher", GenderCode::M),
    ("Eric", GenderCode::M),
    ("Noah", GenderCode::M),
    ("Anthony", GenderCode::M),
    ("Owen", GenderCode::M),
    ("Jennifer", GenderCode::F),
    ("Jessica", GenderCode::F),
    ("Emily", GenderCode::F),
    ("Amanda", GenderCode::F),
    ("Olivia", GenderCode::F),
    ("Ava", GenderCode::F),
    ("Elizabeth", GenderCode::F),
    ("Sarah", GenderCode::F),
    ("Alex", GenderCode::NB),
    ("Jordan", GenderCode::NB),
    ("Taylor", GenderCode::NB),
    ("Riley", GenderCode::NB),
    ("Avery", GenderCode::NB),
    ("Casey", GenderCode::NB),
    ("Quinn", GenderCode::NB),
    ("Emerson", GenderCode::NB),
];

#[cfg(test)]
mod tests {
    use super::*;
    use nameguess_common::answers::GenderAnswer;

    #[test]
    fn test_builtin_probabilities_sum_to_one() {
        let predictor = LinearNamePredictor::builtin();
        let predictions = predictor.predict(&AnswerSet::default()).unwrap();
        assert_eq!(predictions.len(), predictor.vocabulary().len());
        let total: f64 = predictions.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_builtin_follows_gender_and_letter() {
        let predictor = LinearNamePredictor::builtin();
        let answers = AnswerSet {
            gender: Some(GenderAnswer::Female),
            favorite_letter: Some('j'),
            ..AnswerSet::default()
        };
        let predictions = predictor.predict(&answers).unwrap();
        assert!(predictions[0].name == "Jennifer" || predictions[0].name == "Jessica");
        assert!(predictions
            .windows(2)
            .all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn test_model_file_validation() {
        assert!(matches!(
            LinearNamePredictor::from_json_str(r#"{"vocabulary": []}"#),
            Err(PredictorError::EmptyVocabulary)
        ));
        assert!(matches!(
            LinearNamePredictor::from_json_str(
                r#"{"vocabulary": ["Ann", "Bo"], "weights": {"gender=female": [1.0]}}"#
            ),
            Err(PredictorError::InvalidModel(_))
        ));
        assert!(matches!(
            LinearNamePredictor::from_json_str("not json"),
            Err(PredictorError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_model_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(
            &path,
            r#"{"vocabulary": ["Ann", "Bo"], "bias": [0.0, 1.0],
                "weights": {"gender=female": [3.0, 0.0]}}"#,
        )
        .unwrap();

        let predictor = LinearNamePredictor::from_file(&path).unwrap();
        let neutral = predictor.predict(&AnswerSet::default()).unwrap();
        assert_eq!(neutral[0].name, "Bo");

        let female = AnswerSet {
            gender: Some(GenderAnswer::Female),
            ..AnswerSet::default()
        };
        assert_eq!(predictor.predict(&female).unwrap()[0].name, "Ann");

        assert!(matches!(
            LinearNamePredictor::from_file(&dir.path().join("missing.json")),
            Err(PredictorError::Io(_))
        ));
    }
}
