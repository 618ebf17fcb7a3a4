use pacman_common::{top_scores, ScoreRecord};
use tracing::debug;

/// Every score submitted since the process started. Nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct LeaderboardStore {
    records: Vec<ScoreRecord>,
}

impl LeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, record: ScoreRecord) {
        debug!(name = %record.name, score = record.score, total = self.records.len() + 1, "Score stored");
        self.records.push(record);
    }

    /// The best `limit` records, highest first. Equal scores keep submission order.
    pub fn top(&self, limit: usize) -> Vec<ScoreRecord> {
        top_scores(&self.records, limit)
    }

    /// Removes every record, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_clear() {
        let mut store = LeaderboardStore::new();
        store.submit(ScoreRecord::new("a", 5));
        store.submit(ScoreRecord::new("b", 50));
        store.submit(ScoreRecord::new("c", 20));

        assert_eq!(store.top(2), vec![ScoreRecord::new("b", 50), ScoreRecord::new("c", 20)]);
        assert_eq!(store.len(), 3);

        assert_eq!(store.clear(), 3);
        assert!(store.is_empty());
        assert!(store.top(10).is_empty());
    }
}
