use structa_types::{HistoryEntry, HistoryStore};

/// How many past exchanges the session view shows
pub const RECENT_DISPLAY_LIMIT: usize = 3;

/// Append-only history that lives exactly as long as the process.
/// Owned by the session loop and injected where needed.
#[derive(Default)]
pub struct InMemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl InMemoryHistory {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }
}
