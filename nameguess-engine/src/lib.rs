//! nameguess-engine library interface
//!
//! Name inference pipeline: data sources → enricher → indexed database →
//! candidate retriever → scoring engine → hybrid ranker. [`Engine`] ties the
//! stages together behind one owned object.

pub mod db;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod predictor;
pub mod ranker;
pub mod record;
pub mod retriever;
pub mod scoring;

pub use crate::db::{LoadReport, NameDatabase, NameTable};
pub use crate::engine::Engine;
pub use crate::error::{EngineError, PredictorError, Result, SourceError};
pub use crate::predictor::{LinearNamePredictor, NamePredictor, Prediction};
pub use crate::ranker::{Guess, GuessSource, NoNoise, NoiseSource, UniformNoise};
pub use crate::record::{GenderCode, NameAttributes, NameRecord};
pub use crate::retriever::{CandidateRetriever, NonBinaryCandidate, NonBinaryPolicy};
pub use crate::scoring::{ScoredCandidate, ScoringEngine};
