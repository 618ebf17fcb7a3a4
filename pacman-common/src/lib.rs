//! Types shared between the game client and the leaderboard server.

use serde::{Deserialize, Serialize};

/// A single leaderboard entry: who played and how far they got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Sorts records by score, highest first, and keeps at most `limit` of them.
///
/// The sort is stable, so records with equal scores keep their submission order.
pub fn top_scores(records: &[ScoreRecord], limit: usize) -> Vec<ScoreRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_top_scores_sorts_descending_and_truncates() {
        let records = vec![
            ScoreRecord::new("ann", 120),
            ScoreRecord::new("bob", 900),
            ScoreRecord::new("cat", 450),
        ];

        let top = top_scores(&records, 2);
        assert_eq!(top, vec![ScoreRecord::new("bob", 900), ScoreRecord::new("cat", 450)]);
    }

    #[test]
    fn test_top_scores_keeps_submission_order_on_ties() {
        let records = vec![ScoreRecord::new("first", 10), ScoreRecord::new("second", 10)];
        let top = top_scores(&records, 10);
        assert_eq!(top[0].name, "first");
        assert_eq!(top[1].name, "second");
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(ScoreRecord::new("ann", 42)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "ann", "score": 42 }));
    }
}
