use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value::StructuredValue;

/// One completed exchange: what was asked, what came back, and from where.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub request: String,
    pub response: StructuredValue,
    pub model: String,
}

impl HistoryEntry {
    pub fn new(request: String, response: StructuredValue, model: String) -> Self {
        Self {
            timestamp: Utc::now(),
            request,
            response,
            model,
        }
    }
}

/// Caller-owned conversation history.
///
/// The store is injected into whatever drives the interaction loop; there
/// is no process-wide session state. Implementations are append-only —
/// entries are never rewritten or dropped while the store lives.
pub trait HistoryStore {
    fn append(&mut self, entry: HistoryEntry);

    /// Up to `n` entries, most recent first
    fn recent(&self, n: usize) -> Vec<&HistoryEntry>;
}
