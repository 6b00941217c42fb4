//! Name database
//!
//! Loads raw frequency lines from every configured [`LineSource`], aggregates
//! them per (lower-cased name, gender) key, enriches each aggregated record once,
//! and builds the lookup indexes. The result is a read-only [`NameTable`].
//!
//! # Lifecycle
//! [`NameDatabase::ensure_loaded`] is idempotent and safe to call concurrently:
//! the first caller starts the load, every other caller awaits that same load,
//! and all of them observe the same table. There is never more than one load.
//!
//! # Failure handling
//! - A malformed line is skipped and counted.
//! - A source that cannot be read is logged and contributes zero records.
//! - If no source yields a record, the embedded fallback names are loaded
//!   instead, so the table is never empty.

mod fallback;
mod index;
mod parse;
pub mod source;

pub use fallback::FALLBACK_YEAR;
pub use index::CriteriaKey;
pub use source::{LineSource, SourceFormat};

use crate::enrich::enrich;
use crate::error::{EngineError, Result};
use crate::record::{GenderCode, NameRecord, PopularityBucket};
use index::NameIndexes;
use nameguess_common::events::{EngineEvent, EventBus};
use nameguess_common::tags::{LengthBucket, StartClass};
use parse::{parse_line, LineOutcome, ParsedLine};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Summary of a completed load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub load_id: Uuid,
    /// Unique (name, gender) records in the table
    pub records: usize,
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub lines_accepted: usize,
    /// Malformed lines skipped across all sources
    pub skipped_lines: usize,
    /// True when the embedded fallback names were loaded
    pub used_fallback: bool,
}

/// Record under aggregation
struct RecordBuilder {
    name: String,
    gender: GenderCode,
    total_count: u64,
    year_counts: Vec<(u16, u64)>,
    state_counts: BTreeMap<String, u64>,
}

/// Accumulates parsed lines into one builder per key
#[derive(Default)]
struct Aggregator {
    positions: HashMap<String, usize>,
    builders: Vec<RecordBuilder>,
}

impl Aggregator {
    /// Returns (accepted, skipped) line counts
    fn ingest(&mut self, format: SourceFormat, lines: &[String]) -> (usize, usize) {
        let mut accepted = 0;
        let mut skipped = 0;
        for line in lines {
            match parse_line(format, line) {
                LineOutcome::Accepted(parsed) => {
                    self.add(parsed);
                    accepted += 1;
                }
                LineOutcome::Rejected => skipped += 1,
                LineOutcome::Blank => {}
            }
        }
        (accepted, skipped)
    }

    fn add(&mut self, line: ParsedLine<'_>) {
        let key = NameRecord::key_for(line.name, line.gender);
        let position = match self.positions.get(&key) {
            Some(position) => *position,
            None => {
                self.builders.push(RecordBuilder {
                    name: line.name.to_string(),
                    gender: line.gender,
                    total_count: 0,
                    year_counts: Vec::new(),
                    state_counts: BTreeMap::new(),
                });
                self.positions.insert(key, self.builders.len() - 1);
                self.builders.len() - 1
            }
        };

        let builder = &mut self.builders[position];
        builder.total_count = builder.total_count.saturating_add(line.count);
        builder.year_counts.push((line.year, line.count));
        if let Some(state) = line.state {
            let count = builder.state_counts.entry(state.to_string()).or_insert(0);
            *count = count.saturating_add(line.count);
        }
    }

    fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Enrich each aggregated record once and freeze it
    fn finish(self) -> Vec<Arc<NameRecord>> {
        self.builders
            .into_iter()
            .map(|b| {
                let attributes = enrich(&b.name, b.gender, b.total_count);
                Arc::new(NameRecord {
                    name: b.name,
                    gender: b.gender,
                    total_count: b.total_count,
                    year_counts: b.year_counts,
                    state_counts: b.state_counts,
                    attributes,
                })
            })
            .collect()
    }
}

/// Loaded, indexed, read-only name data
pub struct NameTable {
    records: Vec<Arc<NameRecord>>,
    positions: HashMap<String, usize>,
    indexes: NameIndexes,
    report: LoadReport,
}

impl NameTable {
    fn new(records: Vec<Arc<NameRecord>>, report: LoadReport) -> Self {
        let positions = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.key(), position))
            .collect();
        let indexes = NameIndexes::build(&records);
        Self {
            records,
            positions,
            indexes,
            report,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, in first-seen order
    pub fn records(&self) -> &[Arc<NameRecord>] {
        &self.records
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// States with per-state data, sorted
    pub fn states(&self) -> Vec<String> {
        self.indexes.states()
    }

    pub fn has_state_data(&self) -> bool {
        !self.indexes.states().is_empty()
    }

    /// Point lookup; case-insensitive on the name
    pub fn get_name(&self, name: &str, gender: GenderCode) -> Option<Arc<NameRecord>> {
        self.positions
            .get(&NameRecord::key_for(name, gender))
            .map(|p| Arc::clone(&self.records[*p]))
    }

    pub(crate) fn indexes(&self) -> &NameIndexes {
        &self.indexes
    }

    pub(crate) fn resolve(&self, positions: &[usize]) -> Vec<Arc<NameRecord>> {
        positions
            .iter()
            .map(|p| Arc::clone(&self.records[*p]))
            .collect()
    }

    pub fn names_by_gender(&self, gender: GenderCode) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.gender(gender))
    }

    pub fn names_by_length(&self, length: LengthBucket) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.length(length))
    }

    pub fn names_by_start(&self, start: StartClass) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.start(start))
    }

    pub fn names_by_popularity(&self, popularity: PopularityBucket) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.popularity(popularity))
    }

    pub fn names_by_gender_length(
        &self,
        gender: GenderCode,
        length: LengthBucket,
    ) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.gender_length(gender, length))
    }

    pub fn names_by_gender_start(
        &self,
        gender: GenderCode,
        start: StartClass,
    ) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.gender_start(gender, start))
    }

    pub fn names_by_gender_popularity(
        &self,
        gender: GenderCode,
        popularity: PopularityBucket,
    ) -> Vec<Arc<NameRecord>> {
        self.resolve(self.indexes.gender_popularity(gender, popularity))
    }

    /// Records matching every criterion, from the state-scoped index when a
    /// state is given (popularity then refers to the state count)
    pub fn names_by_all_criteria(
        &self,
        state: Option<&str>,
        gender: GenderCode,
        length: LengthBucket,
        start: StartClass,
        popularity: PopularityBucket,
    ) -> Vec<Arc<NameRecord>> {
        let key = CriteriaKey {
            gender,
            length,
            start,
            popularity,
        };
        match state {
            Some(state) => self.resolve(self.indexes.state_criteria(state, key)),
            None => self.resolve(self.indexes.criteria(key)),
        }
    }
}

/// Owner of the name data and its one-time load
pub struct NameDatabase {
    sources: Vec<Box<dyn LineSource>>,
    events: Option<EventBus>,
    table: OnceCell<NameTable>,
    load_count: AtomicUsize,
}

impl NameDatabase {
    /// Create an unloaded database over `sources`
    pub fn new(sources: Vec<Box<dyn LineSource>>) -> Self {
        Self {
            sources,
            events: None,
            table: OnceCell::new(),
            load_count: AtomicUsize::new(0),
        }
    }

    /// Broadcast load lifecycle events on `bus`
    pub fn with_events(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Create and load in one step
    pub async fn load(sources: Vec<Box<dyn LineSource>>) -> Self {
        let db = Self::new(sources);
        db.ensure_loaded().await;
        db
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.initialized()
    }

    /// Number of loads ever started (0 or 1)
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Load once; concurrent and repeated callers share the single load
    pub async fn ensure_loaded(&self) -> LoadReport {
        self.loaded_table().await.report.clone()
    }

    /// The table, loading it first if needed
    pub async fn loaded_table(&self) -> &NameTable {
        self.table.get_or_init(|| self.run_load()).await
    }

    /// The table if already loaded
    pub fn table(&self) -> Result<&NameTable> {
        self.table.get().ok_or(EngineError::NotLoaded)
    }

    fn emit(&self, event: EngineEvent) {
        if let Some(bus) = &self.events {
            bus.emit_lossy(event);
        }
    }

    async fn run_load(&self) -> NameTable {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        let load_id = Uuid::new_v4();
        info!(
            load_id = %load_id,
            sources = self.sources.len(),
            "Loading name database"
        );
        self.emit(EngineEvent::LoadStarted {
            load_id,
            source_count: self.sources.len(),
            timestamp: chrono::Utc::now(),
        });

        let mut aggregator = Aggregator::default();
        let mut sources_ok = 0;
        let mut sources_failed = 0;
        let mut lines_accepted = 0;
        let mut skipped_lines = 0;

        for source in &self.sources {
            match source.read_lines().await {
                Ok(lines) => {
                    let (accepted, skipped) = aggregator.ingest(source.format(), &lines);
                    sources_ok += 1;
                    lines_accepted += accepted;
                    skipped_lines += skipped;
                    debug!(
                        source = %source.name(),
                        records = accepted,
                        skipped = skipped,
                        "Source loaded"
                    );
                    self.emit(EngineEvent::SourceLoaded {
                        load_id,
                        source: source.name().to_string(),
                        records: accepted,
                        skipped_lines: skipped,
                        timestamp: chrono::Utc::now(),
                    });
                }
                Err(e) => {
                    sources_failed += 1;
                    warn!(source = %source.name(), error = %e, "Skipping unreadable source");
                    self.emit(EngineEvent::SourceFailed {
                        load_id,
                        source: source.name().to_string(),
                        error: e.to_string(),
                        timestamp: chrono::Utc::now(),
                    });
                }
            }
        }

        let used_fallback = aggregator.is_empty();
        if used_fallback {
            warn!(
                sources_failed,
                "No name records loaded from any source, using embedded fallback names"
            );
            let fallback = fallback::fallback_source();
            let lines = fallback.read_lines().await.unwrap_or_default();
            let (accepted, _) = aggregator.ingest(fallback.format(), &lines);
            lines_accepted += accepted;
        }

        let records = aggregator.finish();
        let report = LoadReport {
            load_id,
            records: records.len(),
            sources_ok,
            sources_failed,
            lines_accepted,
            skipped_lines,
            used_fallback,
        };
        let table = NameTable::new(records, report.clone());

        info!(
            load_id = %load_id,
            records = report.records,
            sources_ok,
            sources_failed,
            skipped_lines,
            used_fallback,
            "Name database loaded"
        );
        self.emit(EngineEvent::LoadCompleted {
            load_id,
            records: report.records,
            sources_ok,
            sources_failed,
            used_fallback,
            timestamp: chrono::Utc::now(),
        });

        table
    }
}
