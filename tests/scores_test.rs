//! High-score persistence through the facade crate

use blockfall::scores::{HighScoreStore, MAX_HIGH_SCORES};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OnDisk {
    #[serde(rename = "PlayerName")]
    player_name: String,
    #[serde(rename = "Score")]
    score: u32,
}

#[test]
fn saved_file_is_a_descending_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscores.json"));

    let mut scores = store.load();
    for (name, score) in [("a", 300), ("b", 900), ("c", 100)] {
        store.record(&mut scores, name, score).unwrap();
    }

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let entries: Vec<OnDisk> = serde_json::from_str(&raw).unwrap();
    let ordered: Vec<(&str, u32)> = entries
        .iter()
        .map(|e| (e.player_name.as_str(), e.score))
        .collect();
    assert_eq!(ordered, vec![("b", 900), ("a", 300), ("c", 100)]);
}

#[test]
fn only_top_ten_survive() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscores.json"));

    let mut scores = store.load();
    for score in 1..=15u32 {
        store.record(&mut scores, "p", score * 10).unwrap();
    }

    let loaded = store.load();
    assert_eq!(loaded.len(), MAX_HIGH_SCORES);
    assert_eq!(loaded.top_score(), Some(150));
    assert_eq!(loaded.entries().last().map(|e| e.score), Some(60));
    assert_eq!(store.record(&mut scores, "late", 5).unwrap(), None);
    assert_eq!(store.load(), loaded);
}

#[test]
fn missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("absent.json"));
    assert!(store.load().is_empty());
}

#[test]
fn reads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscores.json");
    let json = serde_json::json!([
        { "PlayerName": "x", "Score": 50 },
        { "PlayerName": "y", "Score": 70 }
    ]);
    std::fs::write(&path, json.to_string()).unwrap();

    let scores = HighScoreStore::new(&path).load();
    assert_eq!(scores.entries()[0].player_name, "y");
    assert_eq!(scores.len(), 2);
}
