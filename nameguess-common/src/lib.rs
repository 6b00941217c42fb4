//! # Nameguess Common Library
//!
//! Shared code for the nameguess workspace including:
//! - Error type and result alias
//! - Bootstrap configuration loading (TOML + root folder resolution)
//! - The validated quiz answer model and shared tag vocabularies
//! - Engine lifecycle events and the event bus

pub mod answers;
pub mod config;
pub mod error;
pub mod events;
pub mod tags;

pub use answers::{AnswerSet, RawAnswers};
pub use error::{Error, Result};
