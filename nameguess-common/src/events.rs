//! Event types for the nameguess engine
//!
//! Lifecycle events are broadcast via [`EventBus`] so that shells (CLI, quiz UI)
//! can report load progress without the engine knowing about them.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Engine event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// Name database load began
    LoadStarted {
        /// Correlates all events of one load
        load_id: Uuid,
        /// Number of sources about to be read
        source_count: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// One source was read and parsed
    SourceLoaded {
        load_id: Uuid,
        /// Source display name (file name or URL)
        source: String,
        /// Lines accepted into the aggregation
        records: usize,
        /// Malformed lines skipped
        skipped_lines: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// One source could not be fetched or read; the load continues without it
    SourceFailed {
        load_id: Uuid,
        source: String,
        error: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Load finished and indexes are built
    LoadCompleted {
        load_id: Uuid,
        /// Unique (name, gender) records in the database
        records: usize,
        sources_ok: usize,
        sources_failed: usize,
        /// True when the embedded fallback names were used
        used_fallback: bool,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A ranked guess list was produced
    GuessesProduced {
        count: usize,
        /// Top guess name, if any
        top: Option<String>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

/// Broadcast bus for [`EngineEvent`]s
///
/// Cloning shares the underlying channel.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EngineEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of events to buffer before dropping old events
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: EngineEvent,
    ) -> Result<usize, broadcast::error::SendError<EngineEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers_is_err() {
        let bus = EventBus::new(10);
        let result = bus.emit(EngineEvent::GuessesProduced {
            count: 0,
            top: None,
            timestamp: chrono::Utc::now(),
        });
        assert!(result.is_err());
        assert_eq!(bus.capacity(), 10);
    }

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let bus = EventBus::new(10);
        let mut rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        bus.emit_lossy(EngineEvent::GuessesProduced {
            count: 2,
            top: Some("Amy".to_string()),
            timestamp: chrono::Utc::now(),
        });

        match rx.recv().await.unwrap() {
            EngineEvent::GuessesProduced { count, top, .. } => {
                assert_eq!(count, 2);
                assert_eq!(top.as_deref(), Some("Amy"));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = EngineEvent::SourceFailed {
            load_id: Uuid::nil(),
            source: "CA.TXT".to_string(),
            error: "missing".to_string(),
            timestamp: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SourceFailed");
        assert_eq!(json["source"], "CA.TXT");
    }
}
