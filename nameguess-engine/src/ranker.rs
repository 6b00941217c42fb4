//! Hybrid ranker
//!
//! Blends the rule-based score of each candidate with the secondary
//! predictor's score for the same name (matched case-insensitively) and turns
//! the blended score into a display confidence.
//!
//! The predictor can only add to a non-empty rule pool. It never originates
//! guesses on its own when retrieval and the fallback list both came up empty.

use crate::predictor::NamePredictor;
use crate::record::NameRecord;
use crate::scoring::{ScoredCandidate, ScoringEngine};
use nameguess_common::tag_enum;
use nameguess_common::AnswerSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Confidence bounds for emitted guesses
pub const MIN_CONFIDENCE: u8 = 20;
pub const MAX_CONFIDENCE: u8 = 95;

/// Floor applied to the scaled score before the rank penalty
const CONFIDENCE_SCORE_FLOOR: f64 = 30.0;
const CONFIDENCE_SCALE: f64 = 0.8;
/// Points lost per rank below the first
const CONFIDENCE_RANK_STEP: f64 = 8.0;

tag_enum! {
    /// Which signal a guess came from
    pub enum GuessSource {
        RuleBased => "rule-based",
        Hybrid => "hybrid",
        MlOnly => "ml-only",
    }
}

/// One ranked guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub name: String,
    /// Display confidence in [20, 95]
    pub confidence: u8,
    pub source: GuessSource,
}

/// Symmetric perturbation added to confidence values
pub trait NoiseSource: Send + Sync {
    fn sample(&self) -> f64;
}

/// Uniform noise in `[-amplitude, amplitude]`
#[derive(Debug, Clone, Copy)]
pub struct UniformNoise {
    pub amplitude: f64,
}

impl NoiseSource for UniformNoise {
    fn sample(&self) -> f64 {
        if self.amplitude.is_finite() && self.amplitude > 0.0 {
            rand::thread_rng().gen_range(-self.amplitude..=self.amplitude)
        } else {
            0.0
        }
    }
}

/// No noise, for deterministic output
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn sample(&self) -> f64 {
        0.0
    }
}

/// Display confidence for a blended score at 1-based `rank`
pub fn confidence(score: f64, rank: usize, noise: f64) -> u8 {
    let base = (score * CONFIDENCE_SCALE).clamp(CONFIDENCE_SCORE_FLOOR, MAX_CONFIDENCE as f64);
    let penalty = rank.saturating_sub(1) as f64 * CONFIDENCE_RANK_STEP;
    let value = (base - penalty + noise).round();
    value.clamp(MIN_CONFIDENCE as f64, MAX_CONFIDENCE as f64) as u8
}

/// Rule candidates sorted by (score desc, total count desc), top `k`
pub fn top_rule_candidates(mut scored: Vec<ScoredCandidate>, k: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.record.total_count.cmp(&a.record.total_count))
    });
    scored.truncate(k);
    scored
}

struct Blended {
    name: String,
    rule: Option<f64>,
    model: Option<f64>,
}

/// Rule-based + predictor ranking over one candidate pool
pub struct HybridRanker<'a> {
    scorer: ScoringEngine,
    predictor: Option<&'a dyn NamePredictor>,
    noise: &'a dyn NoiseSource,
    rule_weight: f64,
    model_weight: f64,
}

impl<'a> HybridRanker<'a> {
    pub fn new(
        predictor: Option<&'a dyn NamePredictor>,
        noise: &'a dyn NoiseSource,
        rule_weight: f64,
        model_weight: f64,
    ) -> Self {
        Self {
            scorer: ScoringEngine::new(),
            predictor,
            noise,
            rule_weight,
            model_weight,
        }
    }

    /// Top `k` guesses for `answers` from `candidates`
    ///
    /// An empty pool is replaced by the fixed fallback names first.
    pub fn rank(
        &self,
        candidates: Vec<Arc<NameRecord>>,
        answers: &AnswerSet,
        k: usize,
    ) -> Vec<Guess> {
        if k == 0 {
            return Vec::new();
        }

        let pool = if candidates.is_empty() {
            debug!("No candidates retrieved, scoring fallback names");
            self.scorer.fallback_candidates(answers)
        } else {
            candidates
        };

        let rule = top_rule_candidates(self.scorer.score_all(&pool, answers), k);
        if rule.is_empty() {
            return Vec::new();
        }

        let Some(predictor) = self.predictor else {
            return self.rule_only(&rule);
        };

        match predictor.predict(answers) {
            Ok(mut predictions) => {
                predictions.truncate(k);
                self.blend(&rule, predictions.iter().map(|p| (p.name.as_str(), p.score())), k)
            }
            Err(e) => {
                warn!(error = %e, "Predictor failed, ranking rule-based only");
                self.rule_only(&rule)
            }
        }
    }

    fn rule_only(&self, rule: &[ScoredCandidate]) -> Vec<Guess> {
        rule.iter()
            .enumerate()
            .map(|(i, c)| Guess {
                name: c.record.name.clone(),
                confidence: confidence(c.score as f64, i + 1, self.noise.sample()),
                source: GuessSource::RuleBased,
            })
            .collect()
    }

    fn blend<'n>(
        &self,
        rule: &[ScoredCandidate],
        model: impl Iterator<Item = (&'n str, f64)>,
        k: usize,
    ) -> Vec<Guess> {
        let mut order: Vec<Blended> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for c in rule {
            let key = c.record.name.to_lowercase();
            if by_name.contains_key(&key) {
                continue;
            }
            by_name.insert(key, order.len());
            order.push(Blended {
                name: c.record.name.clone(),
                rule: Some(c.score as f64),
                model: None,
            });
        }
        for (name, score) in model {
            let key = name.to_lowercase();
            match by_name.get(&key) {
                Some(&i) => order[i].model = Some(score),
                None => {
                    by_name.insert(key, order.len());
                    order.push(Blended {
                        name: name.to_string(),
                        rule: None,
                        model: Some(score),
                    });
                }
            }
        }

        let mut combined: Vec<(f64, Blended)> = order
            .into_iter()
            .map(|b| {
                let score = self.rule_weight * b.rule.unwrap_or(0.0)
                    + self.model_weight * b.model.unwrap_or(0.0);
                (score, b)
            })
            .collect();
        // Stable: ties keep rule order ahead of predictor-only names
        combined.sort_by(|a, b| b.0.total_cmp(&a.0));
        combined.truncate(k);

        combined
            .into_iter()
            .enumerate()
            .map(|(i, (score, b))| Guess {
                name: b.name,
                confidence: confidence(score, i + 1, self.noise.sample()),
                source: match (b.rule.is_some(), b.model.is_some()) {
                    (true, true) => GuessSource::Hybrid,
                    (true, false) => GuessSource::RuleBased,
                    _ => GuessSource::MlOnly,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::error::PredictorError;
    use crate::predictor::Prediction;
    use crate::record::GenderCode;
    use nameguess_common::answers::GenderAnswer;
    use nameguess_common::tags::LengthBucket;
    use std::collections::BTreeMap;

    struct FixedPredictor(Vec<(&'static str, f64)>);

    impl NamePredictor for FixedPredictor {
        fn predict(&self, _: &AnswerSet) -> Result<Vec<Prediction>, PredictorError> {
            Ok(self
                .0
                .iter()
                .map(|(name, p)| Prediction {
                    name: name.to_string(),
                    probability: *p,
                })
                .collect())
        }
    }

    struct FailingPredictor;

    impl NamePredictor for FailingPredictor {
        fn predict(&self, _: &AnswerSet) -> Result<Vec<Prediction>, PredictorError> {
            Err(PredictorError::EmptyVocabulary)
        }
    }

    fn record(name: &str, gender: GenderCode, total: u64) -> Arc<NameRecord> {
        Arc::new(NameRecord {
            name: name.to_string(),
            gender,
            total_count: total,
            year_counts: vec![(1990, total)],
            state_counts: BTreeMap::new(),
            attributes: enrich(name, gender, total),
        })
    }

    fn female_medium() -> AnswerSet {
        AnswerSet {
            gender: Some(GenderAnswer::Female),
            length: Some(LengthBucket::Medium),
            ..AnswerSet::default()
        }
    }

    #[test]
    fn test_confidence_formula() {
        assert_eq!(confidence(100.0, 1, 0.0), 80);
        assert_eq!(confidence(200.0, 1, 0.0), 95);
        assert_eq!(confidence(10.0, 1, 0.0), 30);
        assert_eq!(confidence(100.0, 3, 0.0), 64);
        assert_eq!(confidence(-500.0, 5, -3.0), MIN_CONFIDENCE);
        assert_eq!(confidence(500.0, 1, 3.0), MAX_CONFIDENCE);
    }

    #[test]
    fn test_rule_ties_break_on_total_count() {
        let answers = female_medium();
        let pool = vec![
            record("Ellen", GenderCode::F, 300),
            record("Ellie", GenderCode::F, 900),
        ];
        let scorer = ScoringEngine::new();
        let top = top_rule_candidates(scorer.score_all(&pool, &answers), 5);
        if top[0].score == top[1].score {
            assert_eq!(top[0].record.name, "Ellie");
        }
    }

    #[test]
    fn test_blend_marks_sources() {
        let predictor = FixedPredictor(vec![("olivia", 0.6), ("Ava", 0.4)]);
        let ranker = HybridRanker::new(Some(&predictor), &NoNoise, 0.7, 0.3);
        let pool = vec![
            record("Olivia", GenderCode::F, 5000),
            record("Sophia", GenderCode::F, 4000),
        ];
        let guesses = ranker.rank(pool, &female_medium(), 5);

        assert_eq!(guesses.len(), 3);
        assert_eq!(guesses[0].name, "Olivia");
        assert_eq!(guesses[0].source, GuessSource::Hybrid);
        let sophia = guesses.iter().find(|g| g.name == "Sophia").unwrap();
        assert_eq!(sophia.source, GuessSource::RuleBased);
        let ava = guesses.iter().find(|g| g.name == "Ava").unwrap();
        assert_eq!(ava.source, GuessSource::MlOnly);
    }

    #[test]
    fn test_top_k_is_respected() {
        let predictor = FixedPredictor(vec![("Zed", 0.5), ("Yara", 0.5)]);
        let ranker = HybridRanker::new(Some(&predictor), &NoNoise, 0.7, 0.3);
        let pool: Vec<_> = ["Alice", "Betty", "Carol", "Diana", "Erica", "Fiona"]
            .iter()
            .map(|n| record(n, GenderCode::F, 1000))
            .collect();
        let guesses = ranker.rank(pool, &female_medium(), 3);
        assert_eq!(guesses.len(), 3);
        assert!(guesses
            .iter()
            .all(|g| (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&g.confidence)));
    }

    #[test]
    fn test_predictor_failure_falls_back_to_rule_only() {
        let ranker = HybridRanker::new(Some(&FailingPredictor), &NoNoise, 0.7, 0.3);
        let guesses = ranker.rank(vec![record("Olivia", GenderCode::F, 5000)], &female_medium(), 5);
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].source, GuessSource::RuleBased);
    }

    #[test]
    fn test_empty_pool_uses_fallback_names() {
        let ranker = HybridRanker::new(None, &NoNoise, 0.7, 0.3);
        let guesses = ranker.rank(Vec::new(), &female_medium(), 5);
        assert_eq!(guesses.len(), 5);
        assert!(guesses.iter().all(|g| g.source == GuessSource::RuleBased));
    }

    #[test]
    fn test_zero_k_returns_nothing() {
        let ranker = HybridRanker::new(None, &NoNoise, 0.7, 0.3);
        assert!(ranker
            .rank(vec![record("Olivia", GenderCode::F, 5000)], &female_medium(), 0)
            .is_empty());
    }

    #[test]
    fn test_uniform_noise_stays_in_range() {
        let noise = UniformNoise { amplitude: 3.0 };
        for _ in 0..100 {
            let n = noise.sample();
            assert!((-3.0..=3.0).contains(&n));
        }
        assert_eq!(UniformNoise { amplitude: 0.0 }.sample(), 0.0);
    }

    #[test]
    fn test_non_finite_noise_amplitude_is_ignored() {
        for amplitude in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(UniformNoise { amplitude }.sample(), 0.0);
        }
        let noise = UniformNoise {
            amplitude: f64::INFINITY,
        };
        let ranker = HybridRanker::new(None, &noise, 0.7, 0.3);
        let guesses = ranker.rank(vec![record("Olivia", GenderCode::F, 900)], &female_medium(), 3);
        assert_eq!(guesses.len(), 1);
        assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&guesses[0].confidence));
    }
}
