//! Engine facade
//!
//! One long-lived [`Engine`] owns the name database, the secondary predictor
//! and the event bus. Lookups are synchronous once the database is loaded;
//! [`Engine::calculate_top_guesses`] loads on first use.

use crate::db::source::sources_for;
use crate::db::{LineSource, LoadReport, NameDatabase};
use crate::error::Result;
use crate::predictor::{LinearNamePredictor, NamePredictor};
use crate::ranker::{Guess, HybridRanker, NoiseSource, UniformNoise};
use crate::record::{GenderCode, NameRecord, PopularityBucket};
use crate::retriever::{CandidateRetriever, NonBinaryCandidate, NonBinaryPolicy};
use chrono::Utc;
use nameguess_common::config::{EngineConfig, TomlConfig};
use nameguess_common::events::{EngineEvent, EventBus};
use nameguess_common::tags::{LengthBucket, StartClass};
use nameguess_common::AnswerSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};

pub struct Engine {
    database: NameDatabase,
    config: EngineConfig,
    predictor: Option<Arc<dyn NamePredictor>>,
    noise: Arc<dyn NoiseSource>,
    events: EventBus,
}

impl Engine {
    /// Unloaded engine over `sources` with the built-in predictor
    pub fn new(sources: Vec<Box<dyn LineSource>>, config: EngineConfig) -> Self {
        let events = EventBus::default();
        Self {
            database: NameDatabase::new(sources).with_events(events.clone()),
            noise: Arc::new(UniformNoise {
                amplitude: config.confidence_noise,
            }),
            predictor: Some(Arc::new(LinearNamePredictor::builtin())),
            config,
            events,
        }
    }

    /// Engine for a bootstrap configuration, reading data from `root`
    ///
    /// A model file that cannot be loaded is logged and the ranker runs
    /// rule-based only.
    pub fn from_config(root: &Path, config: &TomlConfig) -> Result<Self> {
        config.engine.validate()?;
        let sources = sources_for(root, &config.data)?;
        info!(
            root = %root.display(),
            sources = sources.len(),
            "Configured name data sources"
        );

        let engine = Self::new(sources, config.engine.clone());
        let predictor: Option<Arc<dyn NamePredictor>> = match &config.engine.model_path {
            Some(path) => match LinearNamePredictor::from_file(path) {
                Ok(model) => Some(Arc::new(model)),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Predictor model unavailable, ranking rule-based only"
                    );
                    None
                }
            },
            None => Some(Arc::new(LinearNamePredictor::builtin())),
        };
        Ok(engine.with_predictor(predictor))
    }

    /// Replace the secondary predictor (`None` ranks rule-based only)
    pub fn with_predictor(mut self, predictor: Option<Arc<dyn NamePredictor>>) -> Self {
        self.predictor = predictor;
        self
    }

    /// Replace the confidence noise source
    pub fn with_noise(mut self, noise: Arc<dyn NoiseSource>) -> Self {
        self.noise = noise;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn database(&self) -> &NameDatabase {
        &self.database
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn is_loaded(&self) -> bool {
        self.database.is_loaded()
    }

    /// Load the database once; see [`NameDatabase::ensure_loaded`]
    pub async fn ensure_loaded(&self) -> LoadReport {
        self.database.ensure_loaded().await
    }

    fn retriever(&self) -> Result<CandidateRetriever<'_>> {
        Ok(CandidateRetriever::new(
            self.database.table()?,
            self.config.max_candidates,
        ))
    }

    /// Unranked candidate pool for `answers`
    pub fn get_candidates(&self, answers: &AnswerSet) -> Result<Vec<Arc<NameRecord>>> {
        Ok(self.retriever()?.get_candidates(answers))
    }

    /// Names used for both genders under `policy`, most frequent first
    pub fn non_binary_names(&self, policy: NonBinaryPolicy) -> Result<Vec<NonBinaryCandidate>> {
        Ok(self.retriever()?.non_binary_names(policy))
    }

    pub fn names_by_gender(&self, gender: GenderCode) -> Result<Vec<Arc<NameRecord>>> {
        Ok(self.database.table()?.names_by_gender(gender))
    }

    pub fn names_by_all_criteria(
        &self,
        state: Option<&str>,
        gender: GenderCode,
        length: LengthBucket,
        start: StartClass,
        popularity: PopularityBucket,
    ) -> Result<Vec<Arc<NameRecord>>> {
        Ok(self
            .database
            .table()?
            .names_by_all_criteria(state, gender, length, start, popularity))
    }

    pub fn get_name(&self, name: &str, gender: GenderCode) -> Result<Option<Arc<NameRecord>>> {
        Ok(self.database.table()?.get_name(name, gender))
    }

    /// Top `k` guesses for `answers`, loading the database first if needed
    pub async fn calculate_top_guesses(&self, answers: &AnswerSet, k: usize) -> Result<Vec<Guess>> {
        self.ensure_loaded().await;
        let candidates = self.get_candidates(answers)?;

        let ranker = HybridRanker::new(
            self.predictor.as_deref(),
            self.noise.as_ref(),
            self.config.rule_weight,
            self.config.model_weight,
        );
        let guesses = ranker.rank(candidates, answers, k);

        info!(
            answered = answers.answered_count(),
            guesses = guesses.len(),
            top = guesses.first().map(|g| g.name.as_str()).unwrap_or("-"),
            "Calculated top guesses"
        );
        self.events.emit_lossy(EngineEvent::GuessesProduced {
            count: guesses.len(),
            top: guesses.first().map(|g| g.name.clone()),
            timestamp: Utc::now(),
        });
        Ok(guesses)
    }

    /// Top guesses using the configured `top_k`
    pub async fn top_guesses(&self, answers: &AnswerSet) -> Result<Vec<Guess>> {
        self.calculate_top_guesses(answers, self.config.top_k).await
    }
}

