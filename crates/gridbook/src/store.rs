//! Snapshot persistence
//!
//! The whole workbook (inputs, formats, validation rules, named ranges,
//! sheet roster, active index) is serialized to a single JSON document
//! after every committed mutation. Computed values are part of the
//! snapshot but are always re-derived on load, so a stale `computed`
//! field can never survive a restore.

use gridbook_core::Workbook;

/// Where workbook snapshots live between sessions.
///
/// Implementations are expected to be infallible at this boundary; a
/// backend that can fail should log and degrade rather than surface
/// errors into the mutation pipeline.
pub trait SnapshotStore {
    /// Load the most recent snapshot, if any
    fn load(&self) -> Option<String>;

    /// Persist a snapshot, replacing any previous one
    fn save(&mut self, snapshot: &str);
}

/// An in-memory store holding at most one snapshot
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store with a snapshot, as if saved by a prior session
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            payload: Some(snapshot.into()),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.payload.clone()
    }

    fn save(&mut self, snapshot: &str) {
        self.payload = Some(snapshot.to_string());
    }
}

/// Serialize a workbook to its snapshot form.
///
/// Serialization failure is logged and yields `None`; the session keeps
/// running on the in-memory state.
pub fn encode(workbook: &Workbook) -> Option<String> {
    match serde_json::to_string(workbook) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("workbook snapshot not saved: {}", e);
            None
        }
    }
}

/// Deserialize a snapshot back into a workbook.
///
/// Malformed or structurally invalid snapshots are rejected with a
/// warning so the caller can fall back to a fresh workbook.
pub fn decode(snapshot: &str) -> Option<Workbook> {
    match serde_json::from_str::<Workbook>(snapshot) {
        Ok(workbook) if workbook.is_well_formed() => Some(workbook),
        Ok(_) => {
            log::warn!("workbook snapshot rejected: structural invariants violated");
            None
        }
        Err(e) => {
            log::warn!("workbook snapshot rejected: {}", e);
            None
        }
    }
}
