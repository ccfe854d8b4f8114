//! High-score table and its JSON file store.
//!
//! The table keeps at most [`MAX_HIGH_SCORES`] entries sorted by score,
//! highest first. On disk it is a plain JSON array of
//! `{"PlayerName": ..., "Score": ...}` objects.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u32,
}

/// Ranked leaderboard, descending by score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary entries, sorting and trimming them.
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Whether `score` would make it onto the table
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map_or(true, |e| score > e.score)
    }

    /// Insert a score and return its 1-based rank, or None if it did not
    /// qualify. Equal scores rank after the ones already recorded.
    pub fn add_score(&mut self, player_name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            player_name: player_name.to_string(),
            score,
        };
        let idx = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(idx, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(idx + 1)
    }
}

/// JSON file holding a [`HighScores`] table
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table. A missing or unreadable file yields an empty table.
    pub fn load(&self) -> HighScores {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no high scores at {}, starting fresh", self.path.display());
                return HighScores::new();
            }
            Err(e) => {
                log::warn!("failed to read {}: {}", self.path.display(), e);
                return HighScores::new();
            }
        };

        match serde_json::from_str::<Vec<HighScoreEntry>>(&json) {
            Ok(entries) => {
                let scores = HighScores::from_entries(entries);
                log::info!("loaded {} high scores", scores.len());
                scores
            }
            Err(e) => {
                log::warn!("ignoring corrupt high score file {}: {}", self.path.display(), e);
                HighScores::new()
            }
        }
    }

    pub fn save(&self, scores: &HighScores) -> Result<()> {
        let json = serde_json::to_string_pretty(scores).context("serialize high scores")?;
        fs::write(&self.path, json)
            .with_context(|| format!("write high scores to {}", self.path.display()))?;
        log::info!("high scores saved ({} entries)", scores.len());
        Ok(())
    }

    /// Insert one score into `scores` and save the table if it made it.
    ///
    /// The in-memory table is updated even when the write fails.
    pub fn record(
        &self,
        scores: &mut HighScores,
        player_name: &str,
        score: u32,
    ) -> Result<Option<usize>> {
        let rank = scores.add_score(player_name, score);
        if rank.is_some() {
            self.save(scores)?;
        }
        Ok(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: u32) -> HighScores {
        let mut scores = HighScores::new();
        for i in 0..n {
            scores.add_score("p", (i + 1) * 100);
        }
        scores
    }

    #[test]
    fn add_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("a", 300), Some(1));
        assert_eq!(scores.add_score("b", 500), Some(1));
        assert_eq!(scores.add_score("c", 400), Some(2));
        let values: Vec<u32> = scores.entries().iter().map(|e| e.score).collect();
        assert_eq!(values, vec![500, 400, 300]);
        assert_eq!(scores.top_score(), Some(500));
    }

    #[test]
    fn ties_rank_after_existing() {
        let mut scores = HighScores::new();
        scores.add_score("first", 200);
        assert_eq!(scores.add_score("second", 200), Some(2));
        assert_eq!(scores.entries()[0].player_name, "first");
    }

    #[test]
    fn table_is_capped() {
        let mut scores = filled(10);
        assert_eq!(scores.len(), MAX_HIGH_SCORES);
        assert!(!scores.qualifies(100));
        assert_eq!(scores.add_score("low", 50), None);
        assert_eq!(scores.add_score("high", 150), Some(10));
        assert_eq!(scores.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries().last().map(|e| e.score), Some(150));
    }

    #[test]
    fn zero_scores_fill_an_open_table() {
        let mut scores = HighScores::new();
        assert!(scores.qualifies(0));
        assert_eq!(scores.add_score("z", 0), Some(1));
    }

    #[test]
    fn from_entries_sorts_and_trims() {
        let entries = (0..12)
            .map(|i| HighScoreEntry {
                player_name: format!("p{i}"),
                score: i * 10,
            })
            .collect();
        let scores = HighScores::from_entries(entries);
        assert_eq!(scores.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(110));
        assert_eq!(scores.entries().last().map(|e| e.score), Some(20));
    }

    #[test]
    fn json_shape() {
        let mut scores = HighScores::new();
        scores.add_score("ana", 1200);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"[{"PlayerName":"ana","Score":1200}]"#);
    }

    #[test]
    fn store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("highscores.json"));

        let mut scores = store.load();
        assert!(scores.is_empty());
        assert_eq!(store.record(&mut scores, "ana", 800).unwrap(), Some(1));
        assert_eq!(store.record(&mut scores, "bo", 1500).unwrap(), Some(1));

        let loaded = store.load();
        assert_eq!(loaded, scores);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].player_name, "bo");
        assert_eq!(loaded.entries()[1].score, 800);
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");
        fs::write(&path, "{not json").unwrap();
        assert!(HighScoreStore::new(&path).load().is_empty());
    }

    #[test]
    fn unsorted_file_is_normalised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.json");
        fs::write(
            &path,
            r#"[{"PlayerName":"a","Score":10},{"PlayerName":"b","Score":90}]"#,
        )
        .unwrap();
        let scores = HighScoreStore::new(&path).load();
        assert_eq!(scores.top_score(), Some(90));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("nope").join("scores.json"));
        let err = store.save(&filled(1)).unwrap_err();
        assert!(err.to_string().contains("write high scores"));
    }
}
